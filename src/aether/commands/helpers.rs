use crate::error::{AetherError, Result};
use crate::index::{index_notes, DisplayNote, NoteSelector};
use crate::model::{Note, NoteKind};
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_notes<S: DataStore>(store: &S) -> Vec<DisplayNote> {
    index_notes(store.list(), store.active())
}

pub fn resolve_selector<S: DataStore>(store: &S, selector: &NoteSelector) -> Result<Uuid> {
    match selector {
        NoteSelector::Active => store
            .active()
            .ok_or_else(|| AetherError::Api("No active note".to_string())),
        NoteSelector::Index(idx) => indexed_notes(store)
            .into_iter()
            .find(|dn| &dn.index == idx)
            .map(|dn| dn.note.id)
            .ok_or_else(|| AetherError::Api(format!("Index {} not found", idx))),
        NoteSelector::Id(id) => store.get(id).map(|note| note.id),
        NoteSelector::Title(title) => store
            .resolve_title(title)
            .ok_or_else(|| AetherError::Api(format!("No note titled \"{}\"", title))),
    }
}

pub fn resolve_selectors<S: DataStore>(store: &S, selectors: &[NoteSelector]) -> Result<Vec<Uuid>> {
    selectors
        .iter()
        .map(|selector| resolve_selector(store, selector))
        .collect()
}

/// Fetches a note and checks that it is of the kind an operation needs.
pub fn note_of_kind<S: DataStore>(
    store: &S,
    id: &Uuid,
    expected: NoteKind,
    operation: &'static str,
) -> Result<Note> {
    let note = store.get(id)?;
    if note.kind != expected {
        return Err(AetherError::UnsupportedKind {
            operation,
            expected,
            actual: note.kind,
        });
    }
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_resolve_each_selector_kind() {
        let fixture = StoreFixture::new()
            .with_text_note("Alpha", "a")
            .with_text_note("Beta", "b");
        let alpha = fixture.id_of("Alpha");
        let beta = fixture.id_of("Beta");
        let store = &fixture.store;

        // Beta was updated last, so it is index 1 and active
        assert_eq!(
            resolve_selector(store, &NoteSelector::Index(DisplayIndex(1))).unwrap(),
            beta
        );
        assert_eq!(resolve_selector(store, &NoteSelector::Active).unwrap(), beta);
        assert_eq!(resolve_selector(store, &NoteSelector::Id(alpha)).unwrap(), alpha);
        assert_eq!(
            resolve_selector(store, &NoteSelector::Title("alpha".into())).unwrap(),
            alpha
        );
    }

    #[test]
    fn test_unknown_selectors_fail() {
        let fixture = StoreFixture::new().with_text_note("Alpha", "a");
        let store = &fixture.store;
        assert!(resolve_selector(store, &NoteSelector::Index(DisplayIndex(9))).is_err());
        assert!(resolve_selector(store, &NoteSelector::Id(Uuid::new_v4())).is_err());
        assert!(resolve_selector(store, &NoteSelector::Title("Gamma".into())).is_err());
    }

    #[test]
    fn test_note_of_kind() {
        let fixture = StoreFixture::new().with_note(NoteKind::Sketch);
        let id = fixture.store.active().unwrap();
        assert!(note_of_kind(&fixture.store, &id, NoteKind::Sketch, "Drawing").is_ok());
        let err = note_of_kind(&fixture.store, &id, NoteKind::Text, "Editing").unwrap_err();
        assert!(matches!(err, AetherError::UnsupportedKind { .. }));
    }
}
