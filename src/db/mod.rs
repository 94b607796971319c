use crate::{
    error::AppResult,
    models::{NewWatchEntry, WatchEntry},
};

pub mod sqlite;

pub use sqlite::SqliteWatchStore;

/// Durable log of watch entries
///
/// Append-only: entries are created and read back, never edited or removed.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WatchStore: Send + Sync {
    /// Persists an entry and returns its freshly assigned id
    ///
    /// The row is committed before this returns. Ids grow strictly and are
    /// never handed out twice.
    async fn add(&self, entry: NewWatchEntry) -> AppResult<i64>;

    /// Returns every stored entry in insertion order (id ascending)
    ///
    /// An empty log yields an empty vector.
    async fn all(&self) -> AppResult<Vec<WatchEntry>>;
}
