use domain::{CreateFavoriteSourceCommand, FavoriteSource};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Favorite source as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSourceResource {
    /// Favorite source ID assigned by this API
    pub id: i64,
    /// News API key issued by the news provider
    pub news_api_key: String,
    /// Source ID at the news provider
    pub source_id: String,
}

/// Request body for creating a favorite source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteSourceResource {
    /// News API key issued by the news provider
    pub news_api_key: String,
    /// Source ID at the news provider
    pub source_id: String,
}

/// Query parameters for looking up favorite sources
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FavoriteSourceQueryParams {
    /// News API key issued by the news provider
    pub news_api_key: String,
    /// Source ID at the news provider; omit to list every favorite source for the key
    pub source_id: Option<String>,
}

impl FavoriteSourceQueryParams {
    /// The source ID to look up, if one was given and is non-empty
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Either a single favorite source or the full list for a News API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteSourceQueryResponse {
    Single(FavoriteSourceResource),
    List(Vec<FavoriteSourceResource>),
}

impl From<FavoriteSource> for FavoriteSourceResource {
    fn from(source: FavoriteSource) -> Self {
        Self {
            id: source.id,
            news_api_key: source.news_api_key,
            source_id: source.source_id,
        }
    }
}

impl From<CreateFavoriteSourceResource> for CreateFavoriteSourceCommand {
    fn from(resource: CreateFavoriteSourceResource) -> Self {
        CreateFavoriteSourceCommand::new(resource.news_api_key, resource.source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_resource_from_entity() {
        let now = Utc::now();
        let entity =
            FavoriteSource::reconstitute(1, now, now, "abc123".to_string(), "bbc-news".to_string());
        let resource = FavoriteSourceResource::from(entity);
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({ "id": 1, "newsApiKey": "abc123", "sourceId": "bbc-news" })
        );
    }

    #[test]
    fn test_command_from_resource() {
        let resource: CreateFavoriteSourceResource =
            serde_json::from_value(json!({ "newsApiKey": "abc123", "sourceId": "cnn" })).unwrap();
        let command = CreateFavoriteSourceCommand::from(resource);
        assert_eq!(command, CreateFavoriteSourceCommand::new("abc123", "cnn"));
    }

    #[test]
    fn test_empty_source_id_is_treated_as_absent() {
        let params = FavoriteSourceQueryParams {
            news_api_key: "abc123".to_string(),
            source_id: Some(String::new()),
        };
        assert_eq!(params.source_id(), None);

        let params = FavoriteSourceQueryParams {
            news_api_key: "abc123".to_string(),
            source_id: Some("cnn".to_string()),
        };
        assert_eq!(params.source_id(), Some("cnn"));
    }

    #[test]
    fn test_query_response_shapes() {
        let single = FavoriteSourceQueryResponse::Single(FavoriteSourceResource {
            id: 1,
            news_api_key: "abc123".to_string(),
            source_id: "cnn".to_string(),
        });
        assert!(serde_json::to_value(&single).unwrap().is_object());

        let list = FavoriteSourceQueryResponse::List(Vec::new());
        assert_eq!(serde_json::to_value(&list).unwrap(), json!([]));
    }
}
