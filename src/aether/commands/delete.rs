use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Deletes notes permanently. Links in other notes are left as they are.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let was_active = store.active() == Some(*id);
        let note = store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            note.title
        )));

        if was_active {
            match store.active() {
                Some(next) => {
                    let next = store.get(&next)?;
                    result.add_message(CmdMessage::info(format!(
                        "Active note is now: {}",
                        next.title
                    )));
                }
                None => result.add_message(CmdMessage::info("No notes left")),
            }
        }
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_and_reports_new_active() {
        let mut fixture = StoreFixture::new()
            .with_text_note("First", "")
            .with_text_note("Second", "");
        let second = fixture.id_of("Second");
        let first = fixture.id_of("First");

        let result = run(&mut fixture.store, &[second]).unwrap();
        assert_eq!(fixture.store.active(), Some(first));
        assert_eq!(result.messages[1].content, "Active note is now: First");
    }

    #[test]
    fn deleting_last_note_clears_active() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Audio);
        let id = fixture.store.active().unwrap();
        let result = run(&mut fixture.store, &[id]).unwrap();
        assert!(fixture.store.is_empty());
        assert_eq!(fixture.store.active(), None);
        assert_eq!(result.messages[1].content, "No notes left");
    }

    #[test]
    fn unknown_id_fails() {
        let mut fixture = StoreFixture::new();
        assert!(run(&mut fixture.store, &[Uuid::new_v4()]).is_err());
    }
}
