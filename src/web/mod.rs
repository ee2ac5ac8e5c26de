//! HTTP surface: routes, handlers and page rendering

pub mod handlers;
pub mod pages;
pub mod response;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::AppError;
use crate::resolver::StatResolver;

/// Everything a request handler needs, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: Arc<StatResolver>,
}

impl AppState {
    pub fn new(resolver: StatResolver) -> Self {
        AppState {
            resolver: Arc::new(resolver),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/lebron", get(handlers::lebron))
        .route("/lakers", get(handlers::lakers))
        .route("/trivia", get(handlers::trivia))
        .route("/stats", get(handlers::stats_index))
        .route("/stats/{date}", get(handlers::game_stats_page))
        .route("/api/stats/{date}", get(handlers::game_stats_json))
        .route("/api/seasons/{year}", get(handlers::season_stats_json))
        .route("/api/career", get(handlers::career_stats_json))
        .with_state(state)
}

/// Binds `bind_address` and serves the router until the process is stopped.
pub async fn serve(state: AppState, bind_address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_address).await?;
    let local_addr = listener.local_addr()?;
    info!("Serving stats for {} at http://{local_addr}/", state.resolver.player_id());

    axum::serve(listener, router(state)).await?;
    Ok(())
}
