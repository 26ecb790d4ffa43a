//! Service entry-point: loads settings, prepares persistence and serves the
//! category endpoints.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalog::config::CatalogSettings;
use catalog::inbound::http::health::HealthState;
use catalog::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use server::{ServerConfig, create_server, drain_on};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("catalog")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics disabled");
            None
        }
    }
}

async fn connect_database(settings: &CatalogSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        return Ok(None);
    };
    let max_connections = settings
        .database_max_connections()
        .map_err(std::io::Error::other)?;

    if settings.run_migrations() {
        apply_migrations(url).await.map_err(std::io::Error::other)?;
    } else {
        info!("skipping database migrations");
    }

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(max_connections))
        .await
        .map_err(std::io::Error::other)?;
    info!(max_connections, "database pool ready");
    Ok(Some(pool))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = CatalogSettings::load_from_iter(std::env::args_os())
        .map_err(|error| std::io::Error::other(format!("failed to load settings: {error}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = connect_database(&settings).await? {
        config = config.with_db_pool(pool);
    }
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(tokio::signal::ctrl_c(), health_state));
    info!(%bind_addr, "catalog server listening");
    server.await
}
