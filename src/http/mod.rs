//! HTTP surface - JSON API plus the embedded single page UI
//!
//! Provides:
//! - Day listing, punch-now, manual create/edit
//! - Tolerant delete by id and the composite fallback
//! - CSV export

pub mod routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
}

impl AppState {
    pub fn new(store: EntryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Run a blocking store call off the async workers.
    pub async fn with_store<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&EntryStore) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| AppError::Other(format!("store task failed: {e}")))?
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route(
            "/api/entries",
            get(routes::api_list_entries).post(routes::api_create_entry),
        )
        .route("/api/entries/remove", post(routes::api_remove_entry))
        .route(
            "/api/entries/:id",
            put(routes::api_update_entry).delete(routes::api_delete_entry),
        )
        .route("/api/punch", post(routes::api_punch))
        .route("/api/export.csv", get(routes::api_export_csv))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(state: AppState, addr: SocketAddr) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!(data_file = %state.store.path().display(), "Entry store ready");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down...");
        })
        .await?;

    Ok(())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidKind(_)
            | AppError::InvalidId(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidTimestamp(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
