use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{timestamp_label, NoteKind};
use crate::store::DataStore;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Local;
use uuid::Uuid;

pub const PNG_MIME: &str = "image/png";

/// Encodes an image snapshot the way the drawing surface hands it over.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Ingests one completed stroke from the sketch surface.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid, data_url: String) -> Result<CmdResult> {
    super::helpers::note_of_kind(store, id, NoteKind::Sketch, "Drawing")?;

    let title = format!("Sketch - {}", timestamp_label(&Local::now()));
    let note = store.update(id, data_url, Some(title))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sketch saved: {} ({} bytes)",
        note.title,
        note.content.len()
    )));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn stores_data_url_with_timestamped_title() {
        let mut fixture = StoreFixture::new()
            .with_text_note("Foo", "")
            .with_note(NoteKind::Sketch);
        let id = fixture.store.active().unwrap();

        let url = encode_data_url(PNG_MIME, b"[[Foo]]");
        let result = run(&mut fixture.store, &id, url.clone()).unwrap();

        let note = &result.affected_notes[0];
        assert_eq!(note.content, url);
        assert!(note.title.starts_with("Sketch - "));
        assert!(note.links().is_empty());
    }

    #[test]
    fn encodes_base64_payload() {
        assert_eq!(encode_data_url(PNG_MIME, b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn rejects_text_notes() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Text);
        let id = fixture.store.active().unwrap();
        assert!(run(&mut fixture.store, &id, "data:,".into()).is_err());
    }
}
