use std::sync::Arc;

use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    openapi::OpenApi,
    redoc::Redoc,
    transform::TransformOpenApi,
};
use axum::{response::IntoResponse, routing::get, Extension, Json};

use crate::state::AppState;

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Notelet API")
        .summary("Minimal in-memory note service")
        .description("CRUD over notes held in process memory; everything resets on restart.")
}

pub fn docs_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route(
            "/docs",
            get_with(
                Redoc::new("/docs/api.json")
                    .with_title("Notelet API")
                    .axum_handler(),
                |op| op.description("This documentation page."),
            ),
        )
        // The raw document itself is not part of the documented API.
        .route("/docs/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(&*api).into_response()
}
