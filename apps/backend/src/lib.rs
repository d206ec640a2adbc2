pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::library::QuizLibrary;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<QuizLibrary>,
}

/// Build the router: JSON API plus the static frontend as the fallback.
///
/// Shared with the integration tests so they exercise the real route table.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/quizzes", get(routes::quizzes::list))
        .route("/api/quiz/{name}", get(routes::quizzes::get))
        .route("/api/media/{quiz}/{filename}", get(routes::media::get))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let quizzes_dir =
        PathBuf::from(std::env::var("QUIZZES_DIR").unwrap_or_else(|_| "quizzes".into()));
    let public_dir =
        PathBuf::from(std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into()));

    if !quizzes_dir.is_dir() {
        tracing::warn!(
            dir = %quizzes_dir.display(),
            "quizzes directory does not exist, listings will fail"
        );
    }

    let state = AppState {
        library: Arc::new(QuizLibrary::new(quizzes_dir)),
    };
    let app = build_router(state, &public_dir);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
