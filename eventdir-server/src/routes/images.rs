//! Image catalog endpoint

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use eventdir_core::ImageMeta;
use serde::Serialize;

use crate::routes::events::{self, EventRequest, EventResponse};
use crate::routes::{AppError, MessageResponse};
use crate::state::AppState;

/// The path segment this route shadows for GET; writes still treat it as an event id.
const IMAGES_SEGMENT: &str = "images";

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/events/images",
        get(list_images)
            .put(update_images_event)
            .delete(delete_images_event),
    )
}

#[derive(Serialize)]
pub struct ImagesResponse {
    pub images: Vec<ImageMeta>,
}

/// GET /events/images - List every image in the catalog
async fn list_images(State(state): State<AppState>) -> Result<Json<ImagesResponse>, AppError> {
    let images = state.eventdir().images().list().await?;
    Ok(Json(ImagesResponse { images }))
}

/// PUT /events/images - Same as PUT /events/:id with id "images"
async fn update_images_event(
    State(state): State<AppState>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    events::replace(&state, IMAGES_SEGMENT, body).await
}

/// DELETE /events/images - Same as DELETE /events/:id with id "images"
async fn delete_images_event(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    events::remove(&state, IMAGES_SEGMENT).await
}
