mod favorite_source;

pub use favorite_source::{
    CreateFavoriteSourceResource, FavoriteSourceQueryParams, FavoriteSourceQueryResponse,
    FavoriteSourceResource,
};
