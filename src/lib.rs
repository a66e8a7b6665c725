//! HTTP server for the vocabulary flashcard quiz.
//!
//! | Method | Path           | Handler                     |
//! |--------|----------------|-----------------------------|
//! | GET    | `/`            | [`handlers::list_sets`]     |
//! | POST   | `/start`       | [`handlers::start`]         |
//! | POST   | `/save_result` | [`handlers::save_result`]   |
//! | GET    | `/get_results` | [`handlers::get_results`]   |
//! | GET    | `/sessions`    | [`handlers::list_sessions`] |

pub mod config;
pub mod handlers;
pub mod services;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use handlers::{get_results, list_sessions, list_sets, save_result, start};

/// Prepare the on-disk state the server relies on.
pub fn bootstrap(config: &Config) -> Result<(), word_deck::Error> {
    config.session_store().ensure_root()
}

pub fn app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(list_sets))
        .route("/start", post(start))
        .route("/save_result", post(save_result))
        .route("/get_results", get(get_results))
        .route("/sessions", get(list_sessions))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(config)
}
