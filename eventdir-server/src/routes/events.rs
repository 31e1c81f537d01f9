//! Event endpoints

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::get,
};
use eventdir_core::{Event, EventDirError, EventInput, EventSummary, ListQuery};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, MessageResponse, body_error};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Query string for GET /events. Both values arrive as raw strings so an
/// empty `?max=` can mean "no limit" instead of a parse failure.
#[derive(Deserialize, Default)]
pub struct ListParams {
    pub search: Option<String>,
    pub max: Option<String>,
}

impl ListParams {
    fn into_query(self) -> Result<ListQuery, EventDirError> {
        let mut query = ListQuery::new();

        if let Some(search) = self.search.filter(|s| !s.is_empty()) {
            query = query.search(search);
        }

        if let Some(max) = self.max.filter(|m| !m.is_empty()) {
            query = query.max(parse_max(&max)?);
        }

        Ok(query)
    }
}

/// Digits-only values too large for `usize` still mean "everything".
fn parse_max(raw: &str) -> Result<usize, EventDirError> {
    let digits = raw.trim();
    match digits.parse::<usize>() {
        Ok(max) => Ok(max),
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(usize::MAX)
        }
        Err(_) => Err(EventDirError::InvalidInput(format!(
            "Invalid max value: {}",
            raw
        ))),
    }
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventSummary>,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub event: Event,
}

/// Request body for creating or replacing an event
#[derive(Deserialize)]
pub struct EventRequest {
    pub event: Option<EventInput>,
}

/// GET /events - List event summaries, optionally searched and limited
async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<EventsResponse>, AppError> {
    let Query(params) =
        params.map_err(|rejection| EventDirError::InvalidInput(rejection.body_text()))?;
    let query = params.into_query()?;
    let events = state.eventdir().events().list(&query).await?;

    Ok(Json(EventsResponse { events }))
}

/// GET /events/:id - Fetch one full event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.eventdir().events().get(&id).await?;
    Ok(Json(EventResponse { event }))
}

/// POST /events - Create an event with a new id
async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let Json(req) = body.map_err(body_error)?;
    let event = state.eventdir().events().create(req.event).await?;

    Ok(Json(EventResponse { event }))
}

/// PUT /events/:id - Replace an event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    replace(&state, &id, body).await
}

/// DELETE /events/:id - Remove an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    remove(&state, &id).await
}

pub(crate) async fn replace(
    state: &AppState,
    id: &str,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let Json(req) = body.map_err(body_error)?;
    let event = state.eventdir().events().update(id, req.event).await?;

    Ok(Json(EventResponse { event }))
}

pub(crate) async fn remove(state: &AppState, id: &str) -> Result<Json<MessageResponse>, AppError> {
    state.eventdir().events().delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Event deleted".to_string(),
    }))
}
