use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    CreateFavoriteSourceResource, FavoriteSourceQueryParams, FavoriteSourceQueryResponse,
    FavoriteSourceResource,
};
use crate::state::AppState;

/// Base path of the favorite sources resource
pub const FAVORITE_SOURCES_PATH: &str = "/api/v1/favorite-sources";

/// Get a favorite source by ID
#[utoipa::path(
    get,
    path = "/api/v1/favorite-sources/{id}",
    tag = "Favorite Sources",
    operation_id = "GetFavoriteSourceById",
    params(
        ("id" = i64, Path, description = "Favorite source ID assigned by this API")
    ),
    responses(
        (status = 200, description = "The favorite source was found", body = FavoriteSourceResource),
        (status = 404, description = "The favorite source was not found")
    )
)]
pub async fn get_favorite_source_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FavoriteSourceResource>> {
    let source = state
        .favorite_source_queries
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(source.into()))
}

/// Create a favorite source
#[utoipa::path(
    post,
    path = "/api/v1/favorite-sources",
    tag = "Favorite Sources",
    operation_id = "CreateFavoriteSource",
    request_body = CreateFavoriteSourceResource,
    responses(
        (status = 201, description = "The favorite source was created", body = FavoriteSourceResource,
            headers(("Location" = String, description = "URL of the created favorite source"))),
        (status = 400, description = "The favorite source was not created")
    )
)]
pub async fn create_favorite_source(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteSourceResource>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(resource) = payload.map_err(|e| {
        tracing::warn!("Rejected favorite source body: {}", e);
        AppError::BadRequest
    })?;

    let source = state
        .favorite_source_commands
        .create(resource.into())
        .await?
        .ok_or(AppError::BadRequest)?;

    let location = format!("{}/{}", FAVORITE_SOURCES_PATH, source.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FavoriteSourceResource::from(source)),
    ))
}

/// Get favorite source(s) according to the query parameters
///
/// With a non-empty `sourceId`, returns the single matching favorite source or 404.
/// Otherwise returns every favorite source for the News API key.
#[utoipa::path(
    get,
    path = "/api/v1/favorite-sources",
    tag = "Favorite Sources",
    operation_id = "GetFavoriteSourceFromQuery",
    params(FavoriteSourceQueryParams),
    responses(
        (status = 200, description = "A single favorite source when sourceId is given, otherwise the list", body = FavoriteSourceQueryResponse),
        (status = 404, description = "No favorite source matches the News API key and source ID")
    )
)]
pub async fn get_favorite_sources_from_query(
    State(state): State<AppState>,
    Query(params): Query<FavoriteSourceQueryParams>,
) -> AppResult<Json<FavoriteSourceQueryResponse>> {
    let queries = &state.favorite_source_queries;

    let response = match params.source_id() {
        Some(source_id) => {
            tracing::debug!("Looking up favorite source {}", source_id);
            let source = queries
                .find_by_news_api_key_and_source_id(&params.news_api_key, source_id)
                .await?
                .ok_or(AppError::NotFound)?;
            FavoriteSourceQueryResponse::Single(source.into())
        }
        None => {
            tracing::debug!("Listing favorite sources for news API key");
            let sources = queries
                .find_all_by_news_api_key(&params.news_api_key)
                .await?;
            FavoriteSourceQueryResponse::List(sources.into_iter().map(Into::into).collect())
        }
    };

    Ok(Json(response))
}
