mod config;
mod errors;
mod intake;
mod mailer;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mailer::{Mailer, SmtpMailer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careers API v{}", env!("CARGO_PKG_VERSION"));

    // Build the SMTP mailer when credentials exist; otherwise every
    // submission fails as a configuration fault, reported opaquely.
    let mailer: Option<Arc<dyn Mailer>> = if config.has_smtp_credentials() {
        let smtp = SmtpMailer::from_config(&config)
            .map_err(|e| anyhow::anyhow!("SMTP transport setup failed: {e}"))?;
        info!(host = %config.smtp_host, port = config.smtp_port, "SMTP mailer initialized");
        Some(Arc::new(smtp))
    } else {
        warn!("EMAIL_USER/EMAIL_PASSWORD not set; submissions will fail until configured");
        None
    };

    let state = AppState {
        config: config.clone(),
        mailer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
