//! Contact book entry point: wires configuration, storage, and the HTTP
//! server together.

mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contactbook::domain::ContactStore;
use contactbook::inbound::http::health::HealthState;
use contactbook::inbound::http::session_config::{BuildMode, session_settings_from_env};
use contactbook::outbound::persistence::JsonFileStorage;
use contactbook::settings::AppSettings;
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load configuration")?;
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address: {}", settings.bind_addr()))?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let data_dir = settings.data_dir();
    let store = ContactStore::new(Arc::new(JsonFileStorage::new(&data_dir)));
    store
        .ensure_exists()
        .await
        .wrap_err("failed to provision the contact collection")?;
    info!(data_dir = %data_dir.display(), "contact collection ready");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    );

    info!(%bind_addr, "starting contact book server");
    server::create_server(health_state, web::Data::new(store), config)
        .wrap_err("failed to start the HTTP server")?
        .await
        .wrap_err("server terminated abnormally")
}
