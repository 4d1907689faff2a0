use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use crud_service::{server, types::Environment};
use item_storage::{
    document_store::{DocumentStore, DynamoDbDocumentStore},
    health_probe::HealthProbe,
    item::ItemStorage,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    info!("Starting Item CRUD Service in {:?} environment", environment);

    let namespace = environment.store_namespace();
    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let document_store: Arc<dyn DocumentStore> = Arc::new(DynamoDbDocumentStore::new(
        dynamodb_client,
        namespace.table_name(),
    ));

    info!("✅ Initialized document store for {}", namespace.table_name());

    let item_storage = Arc::new(ItemStorage::new(document_store.clone()));
    let health_probe = Arc::new(HealthProbe::new(document_store));

    server::start(environment, item_storage, health_probe).await
}
