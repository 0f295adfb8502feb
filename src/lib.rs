//! # notelist_core
//!
//! The core of a single-screen note-taking app: create, edit, pin, search,
//! and delete short text notes, persisted locally in SQLite.
//!
//! ## Features
//!
//! - **Note Management**: Create, update, pin, and delete notes through a single controller
//! - **Stable Ordering**: Lists are always pinned-first, then newest-first
//! - **Live Snapshots**: Every mutation republishes the complete ordered list over a watch channel
//! - **In-memory Search**: Case-insensitive substring search that never touches the store
//! - **First-run Seeding**: An empty store is seeded with example notes so the UI is never blank
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notelist_core::controller::{NoteListController, NotesConfig};
//! use notelist_core::store::NoteStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = NoteStore::open(&NoteStore::default_db_path()?).await?;
//! let notes = NoteListController::new(store, NotesConfig::default()).await?;
//!
//! notes.add_note("Groceries", "milk, eggs, coffee").await?;
//!
//! // The presentation layer renders whatever the latest snapshot holds.
//! for note in notes.notes().iter() {
//!     println!("{} — pinned: {}", note.title, note.is_pinned);
//! }
//!
//! let hits = notes.search("milk");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: The [`Note`](domain::Note) entity, the accent palette, ordering, and query matching
//! - **[`store`]**: SQLite persistence and the live snapshot feed
//! - **[`controller`]**: The note list controller the presentation layer binds to
//! - **[`error`]**: Unified error handling throughout the library
//!
//! ## Data Flow
//!
//! Reads flow store → controller → presentation; writes flow presentation →
//! controller → store, and land back in the controller through the store's
//! snapshot feed. Each emission is a complete replacement of the previous
//! list, so readers never observe a half-applied update. The store is built
//! by the application's composition root and handed to the controller; there
//! is no global database handle.
//!
//! ## Error Handling
//!
//! All fallible operations return [`NotesResult<T>`] wrapping the unified
//! [`NotesError`] type, which converts from the store's error automatically
//! so the `?` operator works throughout. Mutations referencing an unknown
//! note id are silent no-ops by design, not errors.

pub mod controller;
pub mod domain;
pub mod error;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{NotesError, NotesResult};
