//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CREDIT_DASHBOARD`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use credit_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gateway at {}", config.gateway.base_url());
//! ```

mod error;
mod gateway;
mod server;

pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "CREDIT_DASHBOARD";

/// Everything the dashboard reads from the environment.
///
/// Both sections fall back to defaults, so an empty environment gives a
/// development server on port 8080 talking to a scoring API on localhost.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Reads `CREDIT_DASHBOARD__<SECTION>__<KEY>` variables, after pulling
    /// in a `.env` file when one exists.
    ///
    /// `CREDIT_DASHBOARD__GATEWAY__BASE_URL=https://scoring.internal` sets
    /// `gateway.base_url`. Only parsing happens here; call
    /// [`AppConfig::validate`] before serving.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__");

        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate(&self.server.environment)
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
