use clap::{Args, Parser, Subcommand};

use crate::client::DEFAULT_ENDPOINT;

#[derive(Parser, Clone, Debug)]
#[clap(name = "spicy-symphony-booking", version, about = "Table reservations for Spicy Symphony")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Fill in the reservation form and submit it
    Book(BookArgs),
    /// Run the in-memory development backend
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct BookArgs {
    #[clap(env = "RESERVATION_ENDPOINT", long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[clap(env = "CONFIRMATION_DISMISS_SECS", long, default_value_t = 20)]
    pub dismiss_after_secs: u64,

    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub phone: String,

    #[clap(long)]
    pub email: String,

    #[clap(long)]
    pub date: String,

    #[clap(long)]
    pub time: String,

    /// Party size label, e.g. "2-4"
    #[clap(long)]
    pub persons: String,

    #[clap(long, default_value = "")]
    pub message: String,

    /// Acknowledge the reservation policy (arrive within 30 minutes)
    #[clap(long)]
    pub agree_policy: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    #[clap(env = "PORT", long, default_value_t = 8080)]
    pub port: u16,

    #[clap(env = "ORIGIN_URLS", long, default_value = "*")]
    pub origin_urls: String,
}
