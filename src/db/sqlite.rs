use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteSynchronous},
    SqlitePool,
};

use super::WatchStore;
use crate::{
    error::AppResult,
    models::{NewWatchEntry, Rating, WatchEntry, DATE_FORMAT},
};

const CREATE_WATCHED_MOVIES: &str = r#"
CREATE TABLE IF NOT EXISTS watched_movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    movie_title TEXT NOT NULL,
    watch_date TEXT NOT NULL,
    rating INTEGER NOT NULL,
    notes TEXT
)
"#;

/// Creates the SQLite pool backing the store
///
/// The pool holds a single long-lived connection, so every statement runs
/// through one handle and writes are serialized. Keeping that connection open
/// also keeps `:memory:` databases alive for the life of the pool.
pub async fn create_pool(options: SqliteConnectOptions) -> AppResult<SqlitePool> {
    let options = options
        .synchronous(SqliteSynchronous::Full)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Row as stored; `notes` may be NULL in files written by older tooling
#[derive(Debug, sqlx::FromRow)]
struct WatchRow {
    id: i64,
    movie_title: String,
    watch_date: String,
    rating: i64,
    notes: Option<String>,
}

impl TryFrom<WatchRow> for WatchEntry {
    type Error = sqlx::Error;

    fn try_from(row: WatchRow) -> Result<Self, Self::Error> {
        let watch_date = chrono::NaiveDate::parse_from_str(&row.watch_date, DATE_FORMAT)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let rating = Rating::new(row.rating).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(WatchEntry {
            id: row.id,
            movie_title: row.movie_title,
            watch_date,
            rating,
            notes: row.notes.unwrap_or_default(),
        })
    }
}

/// Watch log kept in the `watched_movies` table of a local SQLite file
#[derive(Clone)]
pub struct SqliteWatchStore {
    pool: SqlitePool,
}

impl SqliteWatchStore {
    /// Opens the database file, creating it and the table if absent
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let newly_created = !path.exists();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(sqlx::Error::Io)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let store = Self::from_pool(create_pool(options).await?).await?;

        if newly_created {
            tracing::info!(path = %path.display(), "Initialized new watch log");
        } else {
            tracing::info!(path = %path.display(), "Opened existing watch log");
        }

        Ok(store)
    }

    /// Opens a private in-memory database, discarded when the store is dropped
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::from_pool(create_pool(options).await?).await
    }

    async fn from_pool(pool: SqlitePool) -> AppResult<Self> {
        sqlx::query(CREATE_WATCHED_MOVIES).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl WatchStore for SqliteWatchStore {
    async fn add(&self, entry: NewWatchEntry) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO watched_movies (movie_title, watch_date, rating, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.movie_title())
        .bind(entry.watch_date().format(DATE_FORMAT).to_string())
        .bind(i64::from(entry.rating().value()))
        .bind(entry.notes())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, title = %entry.movie_title(), rating = %entry.rating(), "Stored watch entry");

        Ok(id)
    }

    async fn all(&self) -> AppResult<Vec<WatchEntry>> {
        let rows: Vec<WatchRow> = sqlx::query_as(
            "SELECT id, movie_title, watch_date, rating, notes FROM watched_movies ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .map(WatchEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
