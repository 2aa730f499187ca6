use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credit_dashboard::adapters::{
    build_router, CachedScoringGateway, HttpGatewayConfig, HttpScoringGateway,
};
use credit_dashboard::config::AppConfig;
use credit_dashboard::ports::ScoringGateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let http_gateway = HttpScoringGateway::new(HttpGatewayConfig::from(&config.gateway))?;
    let gateway: Arc<dyn ScoringGateway> = if config.gateway.cache_enabled {
        Arc::new(CachedScoringGateway::new(Arc::new(http_gateway)))
    } else {
        Arc::new(http_gateway)
    };

    let router = build_router(gateway, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        gateway = %config.gateway.base_url(),
        cache = config.gateway.cache_enabled,
        environment = ?config.server.environment,
        "Credit dashboard listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter; JSON lines in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
