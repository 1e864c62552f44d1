use utoipa::OpenApi;

use crate::api::handlers::favorite_sources;
use crate::models::{
    CreateFavoriteSourceResource, FavoriteSourceQueryResponse, FavoriteSourceResource,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CatchUp News API",
        version = "1.0.0"
    ),
    paths(
        favorite_sources::get_favorite_source_by_id,
        favorite_sources::create_favorite_source,
        favorite_sources::get_favorite_sources_from_query
    ),
    tags(
        (name = "Favorite Sources", description = "Favorite news source endpoints")
    ),
    components(schemas(
        FavoriteSourceResource,
        CreateFavoriteSourceResource,
        FavoriteSourceQueryResponse
    ))
)]
pub struct ApiDoc;
