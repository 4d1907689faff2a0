use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use crud_service::{server, types::Environment};
use item_storage::{
    document_store::mock::InMemoryDocumentStore, health_probe::HealthProbe, item::ItemStorage,
};
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Test setup wiring the full router onto an in-memory document store
pub struct TestSetup {
    pub router: Router,
    pub document_store: Arc<InMemoryDocumentStore>,
    pub item_storage: Arc<ItemStorage>,
}

impl TestSetup {
    pub fn new() -> Self {
        setup_test_env();

        let document_store = Arc::new(InMemoryDocumentStore::new());
        let item_storage = Arc::new(ItemStorage::new(document_store.clone()));
        let health_probe = Arc::new(HealthProbe::new(document_store.clone()));

        let router = server::app(
            Environment::Development,
            item_storage.clone(),
            health_probe,
        );

        Self {
            router,
            document_store,
            item_storage,
        }
    }

    pub async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_json_request(
        &self,
        method: &str,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        self.send_request(request).await
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_json_request("POST", route, payload).await
    }

    pub async fn send_put_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_json_request("PUT", route, payload).await
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;

        self.send_request(request).await
    }

    pub async fn send_delete_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("DELETE")
            .body(Body::empty())?;

        self.send_request(request).await
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let body = self.read_response_body(response).await?;
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }

    pub async fn read_response_body(
        &self,
        response: Response,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        Ok(body.to_vec())
    }
}
