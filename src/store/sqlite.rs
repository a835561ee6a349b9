use super::MoodboardStore;
use crate::models::{MoodboardRecord, NewMoodboard};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::info;

const COLUMNS: &str = "id, title, description, content, user_id, created_at, updated_at";

#[derive(Debug, FromRow)]
struct MoodboardRow {
    id: i64,
    title: String,
    description: String,
    content: String,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MoodboardRow> for MoodboardRecord {
    type Error = Error;

    fn try_from(row: MoodboardRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            content: serde_json::from_str(&row.content)?,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// [`MoodboardStore`] backed by a SQLite database through `sqlx`.
#[derive(Clone)]
pub struct SqliteMoodboardStore {
    pool: SqlitePool,
}

impl SqliteMoodboardStore {
    /// Open (creating if needed) the database at `url` and apply migrations.
    ///
    /// In-memory URLs get a single long-lived connection so every query sees
    /// the same database.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if url.contains(":memory:") || url.contains("mode=memory") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        let store = Self::from_pool(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl MoodboardStore for SqliteMoodboardStore {
    async fn insert(&self, moodboard: NewMoodboard) -> Result<MoodboardRecord> {
        let now = Utc::now();
        let content = serde_json::to_string(&moodboard.content)?;

        let mut tx = self.pool.begin().await?;
        let id = sqlx::query(
            "INSERT INTO moodboards \
                (title, description, content, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&moodboard.title)
        .bind(&moodboard.description)
        .bind(&content)
        .bind(moodboard.user_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        tx.commit().await?;

        Ok(MoodboardRecord {
            id,
            title: moodboard.title,
            description: moodboard.description,
            content: moodboard.content,
            user_id: moodboard.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<MoodboardRecord>> {
        let query = format!("SELECT {COLUMNS} FROM moodboards ORDER BY id LIMIT ? OFFSET ?");
        let rows = sqlx::query_as::<_, MoodboardRow>(&query)
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(MoodboardRecord::try_from).collect()
    }
}
