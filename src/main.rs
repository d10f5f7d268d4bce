//! exam-corrector server binary.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use exam_corrector::config::{Cli, Config};
use exam_corrector::server::handler::{build_router, AppState};
use exam_corrector::upstream::gemini::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is optional; real deployments set the environment directly.
    dotenv::dotenv().ok();

    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing/logging.
    let filter = if cli.verbose {
        "exam_corrector=debug,tower_http=debug"
    } else {
        "exam_corrector=info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_target(true)
        .init();

    info!("exam-corrector v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration.
    let mut config = Config::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.server.listen = listen;
    }

    info!(
        route = config.server.route,
        model = config.gemini.model,
        timeout_secs = config.gemini.request_timeout_secs,
        "Configuration loaded"
    );

    // The key is read once; requests fail with 500 while it is missing.
    let api_key = config.api_key_from_env();
    if api_key.is_none() {
        warn!(
            var = config.gemini.api_key_env,
            "Gemini API key not set, corrections will be rejected"
        );
    }

    let gemini = GeminiClient::new(&config)?;
    let config = Arc::new(config);

    // Build application state.
    let state = Arc::new(AppState {
        config: config.clone(),
        api_key,
        gemini,
        start_time: Instant::now(),
    });

    // Build the HTTP router.
    let app = build_router(state);

    // Start the server.
    let listen_addr = config.server.listen.clone();
    info!(addr = listen_addr, "Starting server");

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Listening on {listen_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
