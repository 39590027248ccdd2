//! Chatscript API server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use chatscript_api::adapters::{InMemorySessionStore, LoggingEventSink};
use chatscript_api::error::AppError;
use chatscript_api::routes;
use chatscript_api::state::AppState;
use chatscript_core::clock::SystemClock;
use chatscript_core::presentation::PresentationConfig;
use chatscript_core::rng::{DeterministicRng, ThreadRngSource};
use chatscript_core::user::StaticDirectory;
use chatscript_script::default_script::DEFAULT_SCRIPT;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Chatscript API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Load the script, falling back to the built-in sample.
    let script: Arc<str> = match std::env::var("SCRIPT_PATH") {
        Ok(path) => {
            tracing::info!(path, "loading script");
            Arc::from(std::fs::read_to_string(&path)?)
        }
        Err(_) => Arc::from(DEFAULT_SCRIPT),
    };

    // Build application state with in-process adapters.
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(ThreadRngSource));
    let app_state = AppState::new(
        script,
        Arc::new(InMemorySessionStore::new()),
        Arc::new(StaticDirectory(std::env::var("LEARNER_NAME").ok())),
        Arc::new(LoggingEventSink),
        Arc::new(SystemClock),
        rng,
        Arc::new(PresentationConfig::default()),
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/script", routes::script::router())
        .nest("/api/v1/chat", routes::session::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
