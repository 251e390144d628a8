// src/logging.rs
//! Logging setup shared by services built on this crate.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber: compact format, level
/// from `RUST_LOG` with an `info` fallback. Safe to call more than once;
/// later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}

/// Standard HTTP trace layer for router wiring.
pub fn http_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Permissive CORS layer for development and internal tooling.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::permissive()
}
