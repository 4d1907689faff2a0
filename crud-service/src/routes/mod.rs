mod docs;
pub mod health;
pub mod v1;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    let api = v1::handler().api_route("/health", get(health::handler));

    ApiRouter::new().merge(docs::handler()).nest("/api/v1", api)
}
