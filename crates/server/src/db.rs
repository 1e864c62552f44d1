use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    // Bootstrap schema
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorite_source (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            news_api_key TEXT NOT NULL,
            source_id TEXT NOT NULL,
            UNIQUE (news_api_key, source_id)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}
