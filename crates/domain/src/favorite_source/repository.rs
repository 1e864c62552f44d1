//! Favorite source repository trait.
//!
//! Defines the abstract interface for favorite source persistence operations.

use async_trait::async_trait;

use super::FavoriteSource;
use crate::error::DomainResult;

/// Favorite source repository trait.
///
/// Concrete implementations are provided in the infrastructure layer.
#[async_trait]
pub trait FavoriteSourceRepository: Send + Sync {
    /// Find a favorite source by its ID.
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FavoriteSource>>;

    /// Find all favorite sources owned by a News API key, ordered by ID.
    async fn find_all_by_news_api_key(&self, news_api_key: &str)
        -> DomainResult<Vec<FavoriteSource>>;

    /// Find the favorite source for a (News API key, source ID) pair.
    async fn find_by_news_api_key_and_source_id(
        &self,
        news_api_key: &str,
        source_id: &str,
    ) -> DomainResult<Option<FavoriteSource>>;

    /// Insert a new favorite source and assign its ID.
    ///
    /// Fails with `DomainError::BusinessRule` if the (News API key, source ID)
    /// pair already exists.
    async fn save(&self, source: &mut FavoriteSource) -> DomainResult<()>;
}
