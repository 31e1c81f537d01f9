//! Router assembly: API routes, static files, CORS and request tracing.

use axum::{
    Router,
    http::{HeaderName, Method, header},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::routes;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let public = ServeDir::new(state.eventdir().public_path());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .merge(routes::images::router())
        .merge(routes::events::router())
        .fallback_service(public)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
