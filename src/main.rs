use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use spicy_symphony_booking::config::{BookArgs, Command, Config};
use spicy_symphony_booking::controller;
use spicy_symphony_booking::repositories::memory_repo::MemoryReservationRepo;
use spicy_symphony_booking::ui::{ConsoleNotifier, ConsoleOverlay};
use spicy_symphony_booking::{HttpReservationClient, ReservationFlow};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting in {} environment", config.environment);

    match config.command {
        Command::Book(args) => book(args).await,
        Command::Serve(args) => controller::serve(MemoryReservationRepo::new(), &args).await,
    }
}

async fn book(args: BookArgs) -> anyhow::Result<()> {
    let backend = HttpReservationClient::new(&args.endpoint)
        .context("Reservation endpoint misconfigured")?;

    let mut flow = ReservationFlow::builder()
        .notifier(Arc::new(ConsoleNotifier))
        .overlay(Arc::new(ConsoleOverlay::default()))
        .backend(Arc::new(backend))
        .dismiss_after(Duration::from_secs(args.dismiss_after_secs))
        .build()?;

    let form = flow.form_mut();
    form.input_name(&args.name);
    form.input_phone(&args.phone);
    form.input_email(&args.email);
    form.set_date(&args.date);
    form.set_time(&args.time);
    form.select_persons(&args.persons);
    form.set_message(&args.message);
    form.set_policy_accepted(args.agree_policy);

    if form.email_invalid() {
        info!("Email {} does not look valid", args.email);
    }

    // The user already saw the message; the exit code carries the failure.
    flow.submit().await.context("Reservation was not booked")?;

    info!("Confirmation closes in {}s, press Ctrl-C to dismiss", args.dismiss_after_secs);
    let interrupted = tokio::select! {
        _ = flow.wait_for_dismiss() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        flow.dismiss();
    }
    Ok(())
}
