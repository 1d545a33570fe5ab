//! # Storage Layer
//!
//! The [`DataStore`] trait is the Note Store: it owns the notes, assigns
//! identity, keeps derived link data consistent and tracks the active note.
//! Commands and the API only ever go through this trait.
//!
//! ## Guarantees
//!
//! - Every note has a unique id that is never reassigned.
//! - `update` is the only way `links` change. Text notes get their links
//!   recomputed from content; audio and sketch notes always have none.
//! - `updated_at` strictly increases on every update.
//! - `delete` never rewrites other notes' links. Dangling targets are
//!   filtered lazily by [`DataStore::list_for_graph`].
//! - Operations are atomic with respect to the mapping: a failed call leaves
//!   the store unchanged.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. Notes are not persisted.

use crate::error::Result;
use crate::graph::GraphProjection;
use crate::model::{Note, NoteKind};
use uuid::Uuid;

pub mod memory;

pub trait DataStore {
    /// Create a note of `kind` with default title and content, and make it active.
    fn create(&mut self, kind: NoteKind) -> Note;

    /// Replace a note's content and optionally its title.
    ///
    /// A `None` or empty title keeps the current one.
    fn update(&mut self, id: &Uuid, content: String, title: Option<String>) -> Result<Note>;

    /// Remove a note, re-designating the active note if needed.
    fn delete(&mut self, id: &Uuid) -> Result<Note>;

    /// Mark a note active, or clear the active note with `None`.
    fn set_active(&mut self, id: Option<Uuid>) -> Result<()>;

    fn active(&self) -> Option<Uuid>;

    fn get(&self, id: &Uuid) -> Result<Note>;

    /// All notes in creation order.
    fn list(&self) -> Vec<Note>;

    /// Node/edge projection with dangling edges removed.
    fn list_for_graph(&self) -> GraphProjection;

    /// Case-insensitive exact title lookup; the earliest created note wins.
    fn resolve_title(&self, title: &str) -> Option<Uuid>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
