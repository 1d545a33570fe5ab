use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(
    store: &mut S,
    id: &Uuid,
    content: String,
    title: Option<String>,
) -> Result<CmdResult> {
    let note = store.update(id, content, title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated: {}",
        note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_content_and_links() {
        let mut fixture =
            StoreFixture::new().with_text_note("Welcome to AetherNotes", "<h1>Hi</h1>");
        let welcome = fixture.id_of("Welcome to AetherNotes");
        let note = fixture.store.create(NoteKind::Text);

        let result = run(
            &mut fixture.store,
            &note.id,
            "<p>back to [[welcome to aethernotes]]</p>".into(),
            Some("Journal".into()),
        )
        .unwrap();

        let updated = &result.affected_notes[0];
        assert_eq!(updated.title, "Journal");
        assert_eq!(updated.links(), &[welcome]);
    }

    #[test]
    fn omits_link_when_target_missing() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Text);
        let id = fixture.store.active().unwrap();
        let result = run(
            &mut fixture.store,
            &id,
            "[[Welcome to AetherNotes]]".into(),
            None,
        )
        .unwrap();
        assert!(result.affected_notes[0].links().is_empty());
    }

    #[test]
    fn missing_note_is_an_error() {
        let mut fixture = StoreFixture::new();
        assert!(run(&mut fixture.store, &Uuid::new_v4(), "x".into(), None).is_err());
    }
}
