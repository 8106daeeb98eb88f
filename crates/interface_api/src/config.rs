//! API configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{Currency, LecturerId};
use domain_claims::documents::MAX_DOCUMENT_BYTES;
use domain_claims::WorkflowConfig;

/// API configuration
///
/// Every field can be overridden with an `API_`-prefixed environment
/// variable, e.g. `API_PORT=9000` or `API_SEED_SAMPLE_DATA=true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Recorded on manager claims approved through this service
    pub coordinator_name: String,
    /// Lecturer used when a submission does not name one
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    /// Rate used when a submission leaves it out
    pub default_hourly_rate: Decimal,
    /// Per-file upload limit
    pub max_document_bytes: u64,
    /// Load the demonstration claims at startup
    pub seed_sample_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            coordinator_name: "Coordinator User".to_string(),
            lecturer_id: LecturerId::new(1),
            lecturer_name: "Current User".to_string(),
            default_hourly_rate: Decimal::from(150),
            max_document_bytes: MAX_DOCUMENT_BYTES,
            seed_sample_data: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Workflow settings derived from this configuration
    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            coordinator_name: self.coordinator_name.clone(),
            currency: Currency::ZAR,
        }
    }
}
