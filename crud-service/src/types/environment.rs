//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use item_storage::document_store::StoreNamespace;

/// Default listening port when `PORT` is unset
const DEFAULT_PORT: u16 = 8080;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the namespace the items live in
    ///
    /// # Panics
    ///
    /// Panics if `STORE_BUCKET`, `STORE_SCOPE` or `STORE_COLLECTION` is not set
    /// in production/staging
    #[must_use]
    pub fn store_namespace(&self) -> StoreNamespace {
        match self {
            Self::Production | Self::Staging => StoreNamespace::new(
                env::var("STORE_BUCKET").expect("STORE_BUCKET environment variable is not set"),
                env::var("STORE_SCOPE").expect("STORE_SCOPE environment variable is not set"),
                env::var("STORE_COLLECTION")
                    .expect("STORE_COLLECTION environment variable is not set"),
            ),
            Self::Development => StoreNamespace::new(
                env::var("STORE_BUCKET").unwrap_or_else(|_| "appdata".to_string()),
                env::var("STORE_SCOPE").unwrap_or_else(|_| "crud".to_string()),
                env::var("STORE_COLLECTION").unwrap_or_else(|_| "items".to_string()),
            ),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Port the HTTP server listens on, from `PORT`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn port() -> Result<u16, std::num::ParseIntError> {
        env::var("PORT").map_or(Ok(DEFAULT_PORT), |p| p.parse())
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}
