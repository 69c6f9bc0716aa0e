//! Employee directory entry-point: loads settings, prepares storage and runs
//! the HTTP server.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employees::inbound::http::health::HealthState;
use employees::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_async};
use ortho_config::OrthoConfig;

use server::{AppSettings, ServerConfig, create_server, drain_on};

/// Open the pool, applying migrations first unless disabled.
async fn prepare_database(settings: &AppSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.skip_migrations {
        info!("skipping embedded migrations");
    } else {
        let applied = run_pending_migrations_async(url.to_owned())
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database schema up to date");
    }

    let config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
    DbPool::new(config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr();

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = prepare_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_prometheus());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(
        async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                warn!(%error, "cannot listen for ctrl-c; liveness will not drain");
                std::future::pending::<()>().await;
            }
        },
        health_state,
        server.handle(),
    ));
    info!(%bind_addr, "employee directory listening");
    server.await
}
