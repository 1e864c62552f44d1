//! Command and query services for favorite sources.
//!
//! The HTTP layer only sees the two service traits; [`FavoriteSourceService`]
//! implements both over any [`FavoriteSourceRepository`].

use async_trait::async_trait;
use domain::{
    CreateFavoriteSourceCommand, DomainError, DomainResult, FavoriteSource,
    FavoriteSourceRepository,
};

/// Handles commands that change favorite sources
#[async_trait]
pub trait FavoriteSourceCommandService: Send + Sync {
    /// Create a favorite source.
    ///
    /// Returns `Ok(None)` when the command is rejected: a blank field, or a
    /// (News API key, source ID) pair that already exists.
    async fn create(
        &self,
        command: CreateFavoriteSourceCommand,
    ) -> DomainResult<Option<FavoriteSource>>;
}

/// Answers read-only favorite source queries
#[async_trait]
pub trait FavoriteSourceQueryService: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FavoriteSource>>;

    async fn find_all_by_news_api_key(&self, news_api_key: &str)
        -> DomainResult<Vec<FavoriteSource>>;

    async fn find_by_news_api_key_and_source_id(
        &self,
        news_api_key: &str,
        source_id: &str,
    ) -> DomainResult<Option<FavoriteSource>>;
}

pub struct FavoriteSourceService<R> {
    repository: R,
}

impl<R: FavoriteSourceRepository> FavoriteSourceService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: FavoriteSourceRepository> FavoriteSourceCommandService for FavoriteSourceService<R> {
    async fn create(
        &self,
        command: CreateFavoriteSourceCommand,
    ) -> DomainResult<Option<FavoriteSource>> {
        if let Err(e) = command.validate() {
            tracing::warn!("Rejected favorite source: {}", e);
            return Ok(None);
        }

        if self
            .repository
            .find_by_news_api_key_and_source_id(&command.news_api_key, &command.source_id)
            .await?
            .is_some()
        {
            tracing::warn!(
                "Favorite source {} already exists for this news API key",
                command.source_id
            );
            return Ok(None);
        }

        let mut source = FavoriteSource::create(command);
        match self.repository.save(&mut source).await {
            Ok(()) => {
                tracing::info!("Created favorite source {} ({})", source.id, source.source_id);
                Ok(Some(source))
            }
            // Lost a race with a concurrent insert of the same pair
            Err(DomainError::BusinessRule(reason)) => {
                tracing::warn!("Rejected favorite source: {}", reason);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<R: FavoriteSourceRepository> FavoriteSourceQueryService for FavoriteSourceService<R> {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FavoriteSource>> {
        self.repository.find_by_id(id).await
    }

    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &str,
    ) -> DomainResult<Vec<FavoriteSource>> {
        self.repository.find_all_by_news_api_key(news_api_key).await
    }

    async fn find_by_news_api_key_and_source_id(
        &self,
        news_api_key: &str,
        source_id: &str,
    ) -> DomainResult<Option<FavoriteSource>> {
        self.repository
            .find_by_news_api_key_and_source_id(news_api_key, source_id)
            .await
    }
}

#[cfg(test)]
mod mocks {
    //! In-memory repository for exercising the services without SQLite.

    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct MockFavoriteSourceRepository {
        data: Arc<Mutex<Vec<FavoriteSource>>>,
        /// When set, `save` reports a duplicate even if the pair is new.
        fail_save_as_duplicate: Arc<Mutex<bool>>,
    }

    impl MockFavoriteSourceRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_save_as_duplicate(&self) {
            *self.fail_save_as_duplicate.lock().unwrap() = true;
        }

        pub fn len(&self) -> usize {
            self.data.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FavoriteSourceRepository for MockFavoriteSourceRepository {
        async fn find_by_id(&self, id: i64) -> DomainResult<Option<FavoriteSource>> {
            let data = self.data.lock().unwrap();
            Ok(data.iter().find(|s| s.id == id).cloned())
        }

        async fn find_all_by_news_api_key(
            &self,
            news_api_key: &str,
        ) -> DomainResult<Vec<FavoriteSource>> {
            let data = self.data.lock().unwrap();
            Ok(data
                .iter()
                .filter(|s| s.news_api_key == news_api_key)
                .cloned()
                .collect())
        }

        async fn find_by_news_api_key_and_source_id(
            &self,
            news_api_key: &str,
            source_id: &str,
        ) -> DomainResult<Option<FavoriteSource>> {
            let data = self.data.lock().unwrap();
            Ok(data
                .iter()
                .find(|s| s.news_api_key == news_api_key && s.source_id == source_id)
                .cloned())
        }

        async fn save(&self, source: &mut FavoriteSource) -> DomainResult<()> {
            if *self.fail_save_as_duplicate.lock().unwrap() {
                return Err(DomainError::BusinessRule("duplicate".to_string()));
            }
            let mut data = self.data.lock().unwrap();
            source.id = data.len() as i64 + 1;
            data.push(source.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::MockFavoriteSourceRepository;
    use super::*;

    fn service() -> (
        FavoriteSourceService<MockFavoriteSourceRepository>,
        MockFavoriteSourceRepository,
    ) {
        let repo = MockFavoriteSourceRepository::new();
        (FavoriteSourceService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_is_findable() {
        let (service, _) = service();
        let created = service
            .create(CreateFavoriteSourceCommand::new("abc123", "bbc-news"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.news_api_key, "abc123");
        assert_eq!(created.source_id, "bbc-news");

        let found = service.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let (service, repo) = service();
        let result = service
            .create(CreateFavoriteSourceCommand::new("abc123", "  "))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_pair() {
        let (service, repo) = service();
        let command = CreateFavoriteSourceCommand::new("abc123", "cnn");
        assert!(service.create(command.clone()).await.unwrap().is_some());
        assert!(service.create(command).await.unwrap().is_none());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_treats_unique_violation_as_rejection() {
        let (service, repo) = service();
        repo.fail_save_as_duplicate();
        let result = service
            .create(CreateFavoriteSourceCommand::new("abc123", "cnn"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_same_source_for_different_keys() {
        let (service, _) = service();
        service
            .create(CreateFavoriteSourceCommand::new("abc123", "cnn"))
            .await
            .unwrap();
        service
            .create(CreateFavoriteSourceCommand::new("xyz789", "cnn"))
            .await
            .unwrap();

        let sources = service.find_all_by_news_api_key("abc123").await.unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].news_api_key, "abc123");
    }
}
