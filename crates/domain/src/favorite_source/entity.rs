//! Favorite source entity.
//!
//! A news provider source that a client, identified by its News API key,
//! has marked as preferred.

use chrono::{DateTime, Utc};

use super::CreateFavoriteSourceCommand;

/// Favorite source entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteSource {
    /// Assigned by the repository on save; 0 until then.
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// News API key of the owning client.
    pub news_api_key: String,
    /// Source identifier at the news provider (e.g. `bbc-news`).
    pub source_id: String,
}

impl FavoriteSource {
    /// Create a new, unsaved favorite source from a validated command.
    pub fn create(command: CreateFavoriteSourceCommand) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            created_at: now,
            updated_at: now,
            news_api_key: command.news_api_key,
            source_id: command.source_id,
        }
    }

    /// Reconstitute a favorite source from persistence (used by repository).
    pub fn reconstitute(
        id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        news_api_key: String,
        source_id: String,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            news_api_key,
            source_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_command() {
        let source = FavoriteSource::create(CreateFavoriteSourceCommand::new("abc123", "bbc-news"));
        assert_eq!(source.id, 0);
        assert_eq!(source.news_api_key, "abc123");
        assert_eq!(source.source_id, "bbc-news");
        assert_eq!(source.created_at, source.updated_at);
    }

    #[test]
    fn test_reconstitute_keeps_id() {
        let now = Utc::now();
        let source =
            FavoriteSource::reconstitute(7, now, now, "abc123".to_string(), "cnn".to_string());
        assert_eq!(source.id, 7);
        assert_eq!(source.created_at, now);
    }
}
