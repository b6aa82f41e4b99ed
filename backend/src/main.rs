//! Backend entry-point: wires the lead-capture API, sessions, and health
//! probes.

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::{ServerConfig, build_app, session_middleware};

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

    let config = ServerConfig::from_env()?;
    let port = config.port;

    // One store for the process lifetime, handed to every worker.
    let state = web::Data::new(HttpState::with_memory_store());
    let health = web::Data::new(HealthState::new());

    let server_state = state.clone();
    let server_health = health.clone();
    let server = HttpServer::new(move || {
        build_app(
            server_state.clone(),
            server_health.clone(),
            session_middleware(config.key.clone(), config.cookie_secure),
        )
    })
    .bind(("0.0.0.0", port))?;

    health.mark_ready();
    info!(port, "server started");
    server.run().await
}
