//! Summaries follow the same two-step shape as transcription. The summary is
//! appended to the note's content as it is when the result arrives, not as it
//! was when the request was made, so edits made in the meantime survive.

use crate::collab::Summarizer;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AetherError, Result};
use crate::model::{plain_text, NoteKind};
use crate::store::DataStore;
use log::warn;
use uuid::Uuid;

use super::helpers::note_of_kind;

pub const NOTHING_TO_SUMMARIZE: &str = "Nothing to summarize.";
pub const SUMMARIZATION_FAILED: &str = "Summarization failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub note_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub note_id: Uuid,
    pub text: String,
}

pub fn begin<S: DataStore>(store: &S, id: &Uuid) -> Result<SummaryRequest> {
    let note = note_of_kind(store, id, NoteKind::Text, "Summarization")?;
    Ok(SummaryRequest {
        note_id: note.id,
        text: plain_text(&note.content),
    })
}

impl SummaryRequest {
    pub fn execute(&self, summarizer: &dyn Summarizer) -> Summary {
        let text = if self.text.trim().is_empty() {
            NOTHING_TO_SUMMARIZE.to_string()
        } else {
            summarizer.summarize(&self.text).unwrap_or_else(|e| {
                warn!("summary for note {} failed: {}", self.note_id, e);
                SUMMARIZATION_FAILED.to_string()
            })
        };
        Summary {
            note_id: self.note_id,
            text,
        }
    }
}

/// The block appended to a text note, kept distinguishable from user content.
pub fn summary_block(summary: &str) -> String {
    format!(
        "<blockquote><p><strong>AI Summary:</strong></p><p>{}</p></blockquote>",
        summary.replace('\n', "<br>")
    )
}

pub fn complete<S: DataStore>(store: &mut S, summary: Summary) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let note = match store.get(&summary.note_id) {
        Ok(note) => note,
        Err(AetherError::NoteNotFound(id)) => {
            warn!("discarding summary for deleted note {}", id);
            result.add_message(CmdMessage::warning(
                "Summary discarded: the note was deleted",
            ));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let content = format!("{}{}", note.content, summary_block(&summary.text));
    let updated = store.update(&note.id, content, Some(note.title))?;
    result.add_message(CmdMessage::success(format!(
        "Summary added to: {}",
        updated.title
    )));
    result.affected_notes.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::fixtures::Canned;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn request_carries_plain_text() {
        let fixture = StoreFixture::new().with_text_note("T", "<p>Hello</p>");
        let id = fixture.id_of("T");
        let request = begin(&fixture.store, &id).unwrap();
        assert_eq!(request.text, " Hello ");
    }

    #[test]
    fn appends_summary_block_and_keeps_title() {
        let mut fixture = StoreFixture::new().with_text_note("T", "<p>Hello</p>");
        let id = fixture.id_of("T");

        let summary = begin(&fixture.store, &id)
            .unwrap()
            .execute(&Canned::ok("- one\n- two"));
        complete(&mut fixture.store, summary).unwrap();

        let note = fixture.store.get(&id).unwrap();
        assert_eq!(note.title, "T");
        assert_eq!(
            note.content,
            "<p>Hello</p><blockquote><p><strong>AI Summary:</strong></p><p>- one<br>- two</p></blockquote>"
        );
    }

    #[test]
    fn appends_to_content_current_at_completion() {
        let mut fixture = StoreFixture::new().with_text_note("T", "<p>v1</p>");
        let id = fixture.id_of("T");

        let request = begin(&fixture.store, &id).unwrap();
        fixture
            .store
            .update(&id, "<p>v2</p>".into(), None)
            .unwrap();
        complete(&mut fixture.store, request.execute(&Canned::ok("s"))).unwrap();

        let note = fixture.store.get(&id).unwrap();
        assert!(note.content.starts_with("<p>v2</p><blockquote>"));
    }

    #[test]
    fn empty_note_and_failures_use_placeholders() {
        let fixture = StoreFixture::new()
            .with_text_note("Blank", "<p> </p>")
            .with_text_note("Full", "<p>words</p>");

        let blank = begin(&fixture.store, &fixture.id_of("Blank")).unwrap();
        assert_eq!(blank.execute(&Canned::ok("unused")).text, NOTHING_TO_SUMMARIZE);

        let full = begin(&fixture.store, &fixture.id_of("Full")).unwrap();
        assert_eq!(full.execute(&Canned::failing()).text, SUMMARIZATION_FAILED);
    }

    #[test]
    fn late_summary_for_deleted_note_is_discarded() {
        let mut fixture = StoreFixture::new().with_text_note("T", "<p>x</p>");
        let id = fixture.id_of("T");
        let request = begin(&fixture.store, &id).unwrap();
        fixture.store.delete(&id).unwrap();

        let result = complete(&mut fixture.store, request.execute(&Canned::ok("s"))).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert!(fixture.store.get(&id).is_err());
    }

    #[test]
    fn only_text_notes() {
        let fixture = StoreFixture::new().with_note(NoteKind::Sketch);
        let id = fixture.store.active().unwrap();
        assert!(begin(&fixture.store, &id).is_err());
    }
}
