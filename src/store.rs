use crate::domain::{Color, Note};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

/// One complete, ordered emission of the note collection.
pub type Snapshot = Arc<Vec<Note>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("corrupt row: {0}")]
    Corrupt(String),

    #[error("could not determine a data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable persistence for notes over an embedded SQLite database.
///
/// The store is the single owner of the durable rows. Every mutation
/// republishes a complete ordered snapshot on the watch channel returned
/// by [`observe`](NoteStore::observe), so readers always swap in a whole
/// new list rather than patching the old one.
///
/// Cloning is cheap: clones share the pool and the snapshot channel.
#[derive(Clone)]
pub struct NoteStore {
    pool: SqlitePool,
    snapshot: Arc<watch::Sender<Snapshot>>,
}

impl NoteStore {
    /// Opens (creating if necessary) the database at `db_path`.
    ///
    /// Creates the parent directory and the `notes` table when missing,
    /// then loads the initial snapshot.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let connection_path = format!("sqlite:{}?mode=rwc", db_path.display());
        debug!(db = %db_path.display(), "opening note store");

        let pool = SqlitePool::connect(&connection_path).await?;
        Self::from_pool(pool).await
    }

    /// Opens a throwaway in-memory store.
    ///
    /// Used by tests and by callers that want a non-durable scratch list.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        // A pooled `:memory:` database is per-connection; pin a single
        // long-lived connection so every query sees the same rows.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    /// The conventional per-user database location, `{data_dir}/notelist/notes.db`.
    pub fn default_db_path() -> Result<PathBuf, StoreError> {
        let data = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(data.join("notelist").join("notes.db"))
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL DEFAULT '',
                content TEXT NOT NULL DEFAULT '',
                timestamp_ms INTEGER NOT NULL,
                color INTEGER NOT NULL,
                is_pinned INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await?;

        let initial = fetch_all_ordered(&pool).await?;
        let (snapshot, _) = watch::channel(Arc::new(initial));

        Ok(NoteStore {
            pool,
            snapshot: Arc::new(snapshot),
        })
    }

    /// Inserts a new note row and republishes the snapshot.
    pub async fn insert(&self, note: &Note) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO notes (id, title, content, timestamp_ms, color, is_pinned)
            VALUES (?,?,?,?,?,?)",
        )
        .bind(note.id.to_string())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.timestamp_ms)
        .bind(note.color.0 as i64)
        .bind(note.is_pinned)
        .execute(&self.pool)
        .await?;

        self.publish().await
    }

    /// Replaces the row matching `note.id`.
    ///
    /// Returns whether a row was updated; an unknown id touches nothing
    /// and is not an error.
    pub async fn update(&self, note: &Note) -> Result<bool, StoreError> {
        let res = sqlx::query(
            "UPDATE notes SET title = ?, content = ?, timestamp_ms = ?, is_pinned = ?
            WHERE id = ?",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.timestamp_ms)
        .bind(note.is_pinned)
        .bind(note.id.to_string())
        .execute(&self.pool)
        .await?;

        let updated = res.rows_affected() > 0;
        if updated {
            self.publish().await?;
        }
        Ok(updated)
    }

    /// Deletes the row with the given id. Idempotent.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        let removed = res.rows_affected() > 0;
        if removed {
            self.publish().await?;
        }
        Ok(removed)
    }

    /// Number of persisted notes.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get(0))
    }

    /// All persisted notes, ordered pinned-first then newest-first.
    pub async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        fetch_all_ordered(&self.pool).await
    }

    /// Subscribes to the live snapshot feed.
    ///
    /// The receiver starts at the current snapshot and sees a complete
    /// replacement after every mutation.
    pub fn observe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    async fn publish(&self) -> Result<(), StoreError> {
        let notes = fetch_all_ordered(&self.pool).await?;
        self.snapshot.send_replace(Arc::new(notes));
        Ok(())
    }
}

async fn fetch_all_ordered(pool: &SqlitePool) -> Result<Vec<Note>, StoreError> {
    let rows = sqlx::query(
        "SELECT id, title, content, timestamp_ms, color, is_pinned FROM notes
        ORDER BY is_pinned DESC, timestamp_ms DESC",
    )
    .fetch_all(pool)
    .await?;

    let mut notes = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get(0);
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| StoreError::Corrupt(format!("bad note id '{id_str}': {e}")))?;

        notes.push(Note {
            id,
            title: row.get(1),
            content: row.get(2),
            timestamp_ms: row.get(3),
            color: Color(row.get::<i64, _>(4) as u32),
            is_pinned: row.get(5),
        });
    }

    Ok(notes)
}
