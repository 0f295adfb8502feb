use crate::domain::Note;
use crate::error::NotesResult;
use crate::store::{NoteStore, Snapshot, StoreError};
use chrono::Utc;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

/// Behavior switches for [`NoteListController`].
#[derive(Debug, Clone, Copy)]
pub struct NotesConfig {
    /// Refresh a note's timestamp when its title/content is edited,
    /// moving it to the top of its pin group. Off by default: an edit
    /// keeps the note's creation time and list position.
    pub bump_on_edit: bool,
    /// Seed an empty store with example notes at construction, so a
    /// fresh install never shows an empty screen.
    pub seed_on_empty: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            bump_on_edit: false,
            seed_on_empty: true,
        }
    }
}

/// The single source of truth for the note list as the UI sees it.
///
/// Holds a live subscription to the store's snapshot feed; every store
/// mutation replaces the cached list wholesale, already ordered
/// pinned-first then newest-first. Mutations go through the store and
/// are reflected on the next emission, reads ([`notes`], [`search`])
/// are synchronous against the current snapshot.
///
/// [`notes`]: NoteListController::notes
/// [`search`]: NoteListController::search
pub struct NoteListController {
    store: NoteStore,
    config: NotesConfig,
    snapshots: watch::Receiver<Snapshot>,
}

impl NoteListController {
    /// Builds a controller over the given store.
    ///
    /// When the store is empty and `config.seed_on_empty` is set, seeds
    /// it with a welcome note and sample content first. The gate is the
    /// live empty check, so a user who deletes every note gets reseeded
    /// on the next cold start.
    pub async fn new(store: NoteStore, config: NotesConfig) -> NotesResult<Self> {
        if config.seed_on_empty && store.count().await? == 0 {
            seed_examples(&store).await?;
        }

        let snapshots = store.observe();

        Ok(NoteListController {
            store,
            config,
            snapshots,
        })
    }

    /// Creates and persists a new note.
    ///
    /// No validation: empty title and content are permitted. The
    /// presentation layer suppresses saves where both fields are blank.
    pub async fn add_note(&self, title: &str, content: &str) -> NotesResult<()> {
        self.store.insert(&Note::new(title, content)).await?;
        Ok(())
    }

    /// Replaces the title and content of the note with the given id.
    ///
    /// Unknown ids are a silent no-op. With `bump_on_edit` set the
    /// note's timestamp is refreshed as well.
    pub async fn update_note(&self, id: Uuid, title: &str, content: &str) -> NotesResult<()> {
        let Some(mut note) = self.find(id) else {
            return Ok(());
        };

        note.title = title.to_owned();
        note.content = content.to_owned();
        if self.config.bump_on_edit {
            note.timestamp_ms = Utc::now().timestamp_millis();
        }

        self.store.update(&note).await?;
        Ok(())
    }

    /// Deletes the note with the given id. Idempotent: a stale or
    /// unknown id changes nothing and is not an error.
    pub async fn delete_note(&self, id: Uuid) -> NotesResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }

    /// Flips the pinned flag of the note with the given id, floating it
    /// to (or dropping it from) the pinned group on the next emission.
    /// Unknown ids are a silent no-op.
    pub async fn toggle_pin(&self, id: Uuid) -> NotesResult<()> {
        let Some(mut note) = self.find(id) else {
            return Ok(());
        };

        note.is_pinned = !note.is_pinned;
        self.store.update(&note).await?;
        Ok(())
    }

    /// The current ordered snapshot.
    pub fn notes(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribes to the live snapshot feed; each emission fully
    /// replaces the previous list.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.store.observe()
    }

    /// Filters the current snapshot by case-insensitive substring match
    /// on title or content.
    ///
    /// Pure and synchronous: never touches the store, never reorders.
    /// The empty query returns the full list.
    pub fn search(&self, query: &str) -> Vec<Note> {
        self.snapshots
            .borrow()
            .iter()
            .filter(|note| note.matches(query))
            .cloned()
            .collect()
    }

    fn find(&self, id: Uuid) -> Option<Note> {
        self.snapshots
            .borrow()
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }
}

async fn seed_examples(store: &NoteStore) -> Result<(), StoreError> {
    info!("seeding empty note store with example notes");

    let welcome = Note::new(
        "Welcome to Notes App",
        "Tap + to create a note, tap a note to edit it, and long-press to pin or delete.",
    );
    let mut sample = Note::new("Shopping list", "milk\neggs\ncoffee");
    // Keep the welcome note on top even when both land in the same millisecond.
    sample.timestamp_ms = welcome.timestamp_ms - 1;

    store.insert(&sample).await?;
    store.insert(&welcome).await?;
    Ok(())
}
