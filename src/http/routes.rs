//! API handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::core::entries::{EntryLogic, RemoveRequest};
use crate::errors::{AppError, AppResult};
use crate::export::csv::to_csv_string;
use crate::models::Entry;
use crate::utils::date;

/// Index page
pub async fn index() -> impl IntoResponse {
    Html(include_str!("page.html"))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

#[derive(Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

/// GET /api/entries?date=YYYY-MM-DD
pub async fn api_list_entries(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> AppResult<Json<Vec<Entry>>> {
    let day = date::date_or_today(q.date.as_deref().filter(|s| !s.trim().is_empty()));
    let entries = state
        .with_store(move |store| EntryLogic::list_day(store, day))
        .await?;
    Ok(Json(entries))
}

/// POST /api/punch
#[derive(Deserialize)]
pub struct PunchRequest {
    pub kind: Option<String>,
    pub note: Option<String>,
}

pub async fn api_punch(
    State(state): State<AppState>,
    Json(req): Json<PunchRequest>,
) -> AppResult<Json<Entry>> {
    let kind = req.kind.unwrap_or_default();
    let entry = state
        .with_store(move |store| EntryLogic::punch(store, &kind, req.note))
        .await?;
    Ok(Json(entry))
}

/// Body of manual create and edit
#[derive(Deserialize)]
pub struct ManualEntryRequest {
    pub timestamp: DateTime<FixedOffset>,
    pub kind: Option<String>,
    pub note: Option<String>,
}

/// POST /api/entries
pub async fn api_create_entry(
    State(state): State<AppState>,
    Json(req): Json<ManualEntryRequest>,
) -> AppResult<Json<Entry>> {
    let kind = req.kind.unwrap_or_default();
    let entry = state
        .with_store(move |store| EntryLogic::create(store, req.timestamp, &kind, req.note))
        .await?;
    Ok(Json(entry))
}

/// PUT /api/entries/:id
pub async fn api_update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ManualEntryRequest>,
) -> AppResult<Json<Entry>> {
    let kind = req.kind.unwrap_or_default();
    let entry = state
        .with_store(move |store| EntryLogic::update(store, &id, req.timestamp, &kind, req.note))
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/entries/:id
///
/// Accepts the id in any common textual shape.
pub async fn api_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id_text = id.clone();
    match state
        .with_store(move |store| EntryLogic::delete(store, &id_text))
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(AppError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Entry not found", "id": id })),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// POST /api/entries/remove - id first, then timestamp+kind+note
pub async fn api_remove_entry(
    State(state): State<AppState>,
    Json(req): Json<RemoveRequest>,
) -> AppResult<StatusCode> {
    state
        .with_store(move |store| EntryLogic::remove(store, &req))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/export.csv
pub async fn api_export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let entries = state.with_store(|store| store.get_all()).await?;
    let csv = to_csv_string(&entries)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}
