use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ta_api::{create_app, AppState};
use ta_core::repositories::{InMemoryStorage, Storage};
use ta_core::services::{BookingServiceConfig, ServiceRegistry};
use ta_infra::{DatabasePool, MySqlStorage};
use ta_shared::config::{AppConfig, LogFormat, LoggingConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(
        environment = ?config.environment,
        storage = ?config.storage,
        "Starting travel agency API server"
    );

    match config.storage {
        StorageBackend::Memory => serve(Arc::new(InMemoryStorage::new()), config).await,
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to MySQL")?;

            if config.database.run_migrations {
                pool.run_migrations()
                    .await
                    .context("failed to apply database schema")?;
            }

            let result = serve(Arc::new(MySqlStorage::new(pool.clone())), config).await;
            pool.close().await;
            result
        }
    }
}

/// `RUST_LOG` wins over the configured directive when set
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

async fn serve<S: Storage>(storage: Arc<S>, config: AppConfig) -> anyhow::Result<()> {
    let registry = ServiceRegistry::new(storage, BookingServiceConfig::from(&config.booking));
    let state = web::Data::new(AppState::new(registry));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, backend = state.services.storage().backend_name(), "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
