use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use crate::config::ServeArgs;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::memory_repo::MemoryReservationRepo;

pub mod health_check;
pub mod reservation_controller;

pub const RESERVATIONS_PATH: &str = "/api/reservations";

pub async fn serve(
    repo: MemoryReservationRepo,
    args: &ServeArgs,
) -> anyhow::Result<()> {
    let application = router_endpoints(repo)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS
                        ])
                        .allow_origin(allowed_origins(&args.origin_urls)?)
                        .allow_headers([CONTENT_TYPE])
                )
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!("Reservation backend listening on: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the reservation backend")
}

/// `*` allows any origin, otherwise a comma separated list.
pub fn allowed_origins(origin_urls: &str) -> anyhow::Result<AllowOrigin> {
    if origin_urls.trim() == "*" {
        return Ok(AllowOrigin::any());
    }

    let origins = origin_urls
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>().with_context(|| format!("Invalid origin url: {}", s)))
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    Ok(AllowOrigin::list(origins))
}

pub fn router_endpoints(repo: MemoryReservationRepo) -> Router {
    Router::new()
        .nest(RESERVATIONS_PATH, reservation_controller::router(repo.clone()))
        .merge(health_check::router(repo))
        .fallback(page_not_found_handler)
}
