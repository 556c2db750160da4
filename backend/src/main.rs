//! Backend entry-point: loads configuration, prepares the schema and serves
//! the REST endpoints.

use std::env;
use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use bookshelf::server::{ServerConfig, bind_addr_from_port, create_server};
use bookshelf::settings::DatabaseSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load `.env` before anything reads the environment; report once logging
    // is up.
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => info!("no .env file found, using process environment"),
        Err(err) => warn!(error = %err, "failed to load .env file"),
    }

    let settings = DatabaseSettings::load_from_iter(env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load database settings: {err}")))?;
    info!(target_db = %settings.target(), "connecting to database");

    let pool = DbPool::new(PoolConfig::new(settings.connection_string()));
    let failures = ensure_schema(&pool).await;
    if !failures.is_empty() {
        warn!(
            failed = failures.len(),
            "schema initialisation incomplete, continuing"
        );
    }

    let bind_addr = bind_addr_from_port(env::var("PORT").ok().as_deref())?;
    create_server(ServerConfig::new(bind_addr, pool))?.await
}
