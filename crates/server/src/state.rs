use sqlx::SqlitePool;
use std::sync::Arc;

use crate::repositories::SqliteFavoriteSourceRepository;
use crate::services::{
    FavoriteSourceCommandService, FavoriteSourceQueryService, FavoriteSourceService,
};

#[derive(Clone)]
pub struct AppState {
    pub favorite_source_commands: Arc<dyn FavoriteSourceCommandService>,
    pub favorite_source_queries: Arc<dyn FavoriteSourceQueryService>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        // One service instance backs both the command and query sides
        let favorite_sources = Arc::new(FavoriteSourceService::new(
            SqliteFavoriteSourceRepository::new(db),
        ));

        Self {
            favorite_source_commands: favorite_sources.clone(),
            favorite_source_queries: favorite_sources,
        }
    }
}
