//! # Review server
//!
//! HTTP API over a collection of restaurant reviews. Reviews are loaded
//! from a CSV file at startup, held in memory and served sentiment-ranked:
//!
//! - `GET /reviews` filters by location and date range, scores each
//!   surviving review and returns them ordered by compound sentiment.
//! - `POST /reviews` validates a form-encoded submission, stamps it with an
//!   id and timestamp and appends it to the store.
//!
//! The store only grows for the lifetime of the process; nothing is
//! persisted back to disk.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod ingest;
pub mod load;
pub mod locations;
pub mod query;
pub mod routes;
pub mod sentiment;
pub mod state;
pub mod store;

use routes::{get_reviews, post_review};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = build_router(state.clone()).layer(cors);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

/// Unsupported methods on `/reviews` get a 405 from the method router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reviews", get(get_reviews).post(post_review))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
