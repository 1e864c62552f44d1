use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{DomainError, DomainResult, FavoriteSource, FavoriteSourceRepository};
use sqlx::SqlitePool;

/// Common SELECT fields for favorite source queries
const SELECT_FAVORITE_SOURCE: &str = r#"
    SELECT
        id, created_at, updated_at, news_api_key, source_id
    FROM favorite_source
"#;

/// SQLite-backed favorite source repository
#[derive(Clone)]
pub struct SqliteFavoriteSourceRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteSourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteSourceRepository for SqliteFavoriteSourceRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FavoriteSource>> {
        let query = format!("{} WHERE id = $1", SELECT_FAVORITE_SOURCE);
        let row = sqlx::query_as::<_, FavoriteSourceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &str,
    ) -> DomainResult<Vec<FavoriteSource>> {
        let query = format!(
            "{} WHERE news_api_key = $1 ORDER BY id",
            SELECT_FAVORITE_SOURCE
        );
        let rows = sqlx::query_as::<_, FavoriteSourceRow>(&query)
            .bind(news_api_key)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_news_api_key_and_source_id(
        &self,
        news_api_key: &str,
        source_id: &str,
    ) -> DomainResult<Option<FavoriteSource>> {
        let query = format!(
            "{} WHERE news_api_key = $1 AND source_id = $2",
            SELECT_FAVORITE_SOURCE
        );
        let row = sqlx::query_as::<_, FavoriteSourceRow>(&query)
            .bind(news_api_key)
            .bind(source_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, source: &mut FavoriteSource) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO favorite_source (created_at, updated_at, news_api_key, source_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(source.created_at)
        .bind(source.updated_at)
        .bind(&source.news_api_key)
        .bind(&source.source_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DomainError::BusinessRule(format!(
                    "favorite source {} already exists for this news API key",
                    source.source_id
                ))
            }
            e => persistence_error(e),
        })?;

        source.id = sqlx::Row::get(&result, "id");
        Ok(())
    }
}

fn persistence_error(e: sqlx::Error) -> DomainError {
    DomainError::Persistence(e.to_string())
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct FavoriteSourceRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    news_api_key: String,
    source_id: String,
}

impl From<FavoriteSourceRow> for FavoriteSource {
    fn from(row: FavoriteSourceRow) -> Self {
        FavoriteSource::reconstitute(
            row.id,
            row.created_at,
            row.updated_at,
            row.news_api_key,
            row.source_id,
        )
    }
}
