mod favorite_source;

pub use favorite_source::{
    FavoriteSourceCommandService, FavoriteSourceQueryService, FavoriteSourceService,
};
