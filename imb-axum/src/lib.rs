#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod imbalance_routes;
mod report_routes;
mod settlement;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, response::IntoResponse as _};
use imb_core::ports::Application;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

pub use imbalance_routes::{DailyImbalanceResponse, HighestImbalanceHourResponse};
pub use settlement::{DateQuery, ErrorResponse};

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Liveness banner
async fn index() -> impl IntoApiResponse {
    "Server is running".into_response()
}

/// Construct the full API router with the given state, along with the
/// OpenAPI document describing it.
pub fn router<T: ApiApplication>(state: T) -> (axum::Router, OpenApi) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .route("/", get(index))
        .api_route("/health", get(health_check))
        .merge(imbalance_routes::router())
        .merge(report_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api.clone())))
        .layer(CorsLayer::permissive())
        .with_state(state);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app);
    axum::serve(listener, service).await
}

/// Axum requires its state to be cloneable and shareable across threads, and
/// the handlers hold the ports across await points. This trait, coupled with
/// a blanket implementation, states all of that once: any `T: ApiApplication`
/// can be served.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<Fetcher: Send + Sync, Clock: Send + Sync, Renderer: Send + Sync>
{
}

// this is the blanket implementation
impl<T> ApiApplication for T where
    T: Clone
        + Send
        + Sync
        + 'static
        + Application<Fetcher: Send + Sync, Clock: Send + Sync, Renderer: Send + Sync>
{
}
