use super::DataStore;
use crate::error::{AetherError, Result};
use crate::graph::GraphProjection;
use crate::links::{find_by_title, resolve_links};
use crate::model::{Note, NoteKind};
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

/// Session-scoped note store. Does NOT persist data.
///
/// Notes live in a map keyed by id; `order` remembers creation order, which
/// is the stable order used for first-match title resolution and listing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: HashMap<Uuid, Note>,
    order: Vec<Uuid>,
    active: Option<Uuid>,
    dedup_links: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse repeated references to the same note into a single link.
    pub fn with_link_dedup(mut self, dedup: bool) -> Self {
        self.dedup_links = dedup;
        self
    }

    fn ordered(&self) -> impl Iterator<Item = &Note> + Clone {
        self.order.iter().filter_map(|id| self.notes.get(id))
    }

    fn most_recently_updated(&self) -> Option<Uuid> {
        // Ties go to the note created last
        self.ordered()
            .enumerate()
            .max_by_key(|(position, note)| (note.updated_at, *position))
            .map(|(_, note)| note.id)
    }
}

impl DataStore for InMemoryStore {
    fn create(&mut self, kind: NoteKind) -> Note {
        let mut note = Note::new(kind);
        while self.notes.contains_key(&note.id) {
            note.id = Uuid::new_v4();
        }

        debug!("created {} note {}", kind, note.id);
        self.order.push(note.id);
        self.notes.insert(note.id, note.clone());
        self.active = Some(note.id);
        note
    }

    fn update(&mut self, id: &Uuid, content: String, title: Option<String>) -> Result<Note> {
        let kind = self
            .notes
            .get(id)
            .map(|note| note.kind)
            .ok_or(AetherError::NoteNotFound(*id))?;

        let links = match kind {
            NoteKind::Text => {
                let others = self.ordered().filter(|note| &note.id != id);
                resolve_links(&content, others, self.dedup_links)
            }
            NoteKind::Audio | NoteKind::Sketch => Vec::new(),
        };

        let note = self
            .notes
            .get_mut(id)
            .ok_or(AetherError::NoteNotFound(*id))?;
        note.content = content;
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            note.title = title;
        }
        note.links = links;
        note.touch();

        debug!(
            "updated note {} ({} links, title {:?})",
            id,
            note.links.len(),
            note.title
        );
        Ok(note.clone())
    }

    fn delete(&mut self, id: &Uuid) -> Result<Note> {
        let removed = self
            .notes
            .remove(id)
            .ok_or(AetherError::NoteNotFound(*id))?;
        self.order.retain(|other| other != id);

        if self.active == Some(*id) {
            self.active = self.most_recently_updated();
            debug!("active note moved from {} to {:?}", id, self.active);
        }
        debug!("deleted note {}", id);
        Ok(removed)
    }

    fn set_active(&mut self, id: Option<Uuid>) -> Result<()> {
        if let Some(id) = id {
            if !self.notes.contains_key(&id) {
                return Err(AetherError::NoteNotFound(id));
            }
        }
        self.active = id;
        Ok(())
    }

    fn active(&self) -> Option<Uuid> {
        self.active
    }

    fn get(&self, id: &Uuid) -> Result<Note> {
        self.notes
            .get(id)
            .cloned()
            .ok_or(AetherError::NoteNotFound(*id))
    }

    fn list(&self) -> Vec<Note> {
        self.ordered().cloned().collect()
    }

    fn list_for_graph(&self) -> GraphProjection {
        GraphProjection::from_notes(self.ordered())
    }

    fn resolve_title(&self, title: &str) -> Option<Uuid> {
        find_by_title(self.ordered(), title).map(|note| note.id)
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a text note with an explicit title and content.
        pub fn with_text_note(mut self, title: &str, content: &str) -> Self {
            let note = self.store.create(NoteKind::Text);
            self.store
                .update(&note.id, content.to_string(), Some(title.to_string()))
                .unwrap();
            self
        }

        pub fn with_note(mut self, kind: NoteKind) -> Self {
            self.store.create(kind);
            self
        }

        pub fn id_of(&self, title: &str) -> Uuid {
            self.store.resolve_title(title).unwrap()
        }
    }
}
