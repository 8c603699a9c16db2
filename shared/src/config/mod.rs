//! Configuration module with business-specific sub-modules
//!
//! - `booking` - Pricing rules for bookings and refunds
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `logging` - Tracing subscriber settings
//! - `server` - HTTP server and CORS configuration
//! - `storage` - Repository backend selection

pub mod booking;
pub mod database;
pub mod environment;
pub mod logging;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use storage::StorageBackend;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Repository backend
    pub storage: StorageBackend,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Booking pricing configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            storage: StorageBackend::Memory,
            database: DatabaseConfig::new("mysql://localhost:3306/travel_db_dev"),
            booking: BookingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            cors: CorsConfig::default(),
            storage: StorageBackend::MySql,
            database: DatabaseConfig::new("mysql://prod-db:3306/travel_db").with_max_connections(50),
            booking: BookingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from the environment, reading `.env` files first
    ///
    /// The environment preset supplies defaults; explicitly set variables win.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        let preset = match environment {
            Environment::Production => Self::production(),
            Environment::Development | Environment::Staging => Self::development(),
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            storage: StorageBackend::from_env_or(environment.default_storage()),
            database: if std::env::var("DATABASE_URL").is_ok() {
                DatabaseConfig::from_env()
            } else {
                preset.database
            },
            booking: BookingConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
