use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{response::IntoResponse, Extension, Router};
use health::health_routes;
use notes::note_routes;
use openapi::{api_docs, docs_routes};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::errors::RestError;
use crate::state::AppState;

pub mod health;
pub mod notes;
pub mod openapi;

pub fn setup_router(app_state: AppState) -> Router {
    aide::gen::on_error(|error| {
        tracing::error!("OpenAPI generation error: {error}");
    });

    aide::gen::extract_schemas(true);
    let mut api = OpenApi::default();

    ApiRouter::new()
        .merge(health_routes())
        .merge(note_routes())
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs)
        // Unrouted paths still answer in the JSON error shape.
        .fallback(unknown_route)
        .layer(Extension(Arc::new(api)))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn unknown_route() -> impl IntoResponse {
    RestError::UnknownRoute
}
