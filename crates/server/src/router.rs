use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::handlers::{self, FAVORITE_SOURCES_PATH};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            FAVORITE_SOURCES_PATH,
            get(handlers::get_favorite_sources_from_query).post(handlers::create_favorite_source),
        )
        .route(
            &format!("{}/{{id}}", FAVORITE_SOURCES_PATH),
            get(handlers::get_favorite_source_by_id),
        )
        .route("/api/v1/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
