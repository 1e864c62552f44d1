//! Favorite source creation command.

use thiserror::Error;

/// Command to create a new favorite source.
///
/// Built from the incoming resource without checks; the command service
/// calls [`CreateFavoriteSourceCommand::validate`] before persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFavoriteSourceCommand {
    pub news_api_key: String,
    pub source_id: String,
}

/// Error when a favorite source cannot be created from a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateFavoriteSourceError {
    /// News API key cannot be empty.
    #[error("News API key cannot be empty")]
    EmptyNewsApiKey,
    /// Source ID cannot be empty.
    #[error("Source ID cannot be empty")]
    EmptySourceId,
}

impl CreateFavoriteSourceCommand {
    pub fn new(news_api_key: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            news_api_key: news_api_key.into(),
            source_id: source_id.into(),
        }
    }

    /// Reject blank fields. Values are kept exactly as given.
    pub fn validate(&self) -> Result<(), CreateFavoriteSourceError> {
        if self.news_api_key.trim().is_empty() {
            return Err(CreateFavoriteSourceError::EmptyNewsApiKey);
        }

        if self.source_id.trim().is_empty() {
            return Err(CreateFavoriteSourceError::EmptySourceId);
        }

        Ok(())
    }
}
