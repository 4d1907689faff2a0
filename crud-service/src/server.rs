use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use item_storage::{health_probe::HealthProbe, item::ItemStorage};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::routes;
use crate::types::Environment;

/// Builds the application router with its dependencies attached
///
/// Cross-origin requests are accepted from any origin.
pub fn app(
    environment: Environment,
    item_storage: Arc<ItemStorage>,
    health_probe: Arc<HealthProbe>,
) -> Router {
    let mut openapi = OpenApi::default();

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(item_storage))
        .layer(Extension(health_probe))
        .layer(CorsLayer::permissive())
        .layer(tower_http::timeout::TimeoutLayer::new(
            std::time::Duration::from_secs(5),
        ))
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    item_storage: Arc<ItemStorage>,
    health_probe: Arc<HealthProbe>,
) -> anyhow::Result<()> {
    let router = app(environment, item_storage, health_probe)
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], Environment::port()?));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Item CRUD Service started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
