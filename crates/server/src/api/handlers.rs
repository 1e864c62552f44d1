pub mod favorite_sources;

pub use favorite_sources::{
    create_favorite_source, get_favorite_source_by_id, get_favorite_sources_from_query,
    FAVORITE_SOURCES_PATH,
};
