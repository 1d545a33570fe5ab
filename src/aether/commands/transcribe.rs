//! Audio notes are filled in two steps: [`begin`] captures the recording and
//! the target note, the transcriber runs whenever the caller gets to it, and
//! [`complete`] applies the transcript to whatever the store holds by then.
//! A note deleted in between is not recreated; the transcript is dropped.

use crate::collab::{AudioClip, Transcriber};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AetherError, Result};
use crate::model::{timestamp_label, NoteKind};
use crate::store::DataStore;
use chrono::Local;
use log::warn;
use uuid::Uuid;

use super::helpers::note_of_kind;

pub const TRANSCRIPTION_FAILED: &str = "Transcription failed.";

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub note_id: Uuid,
    pub clip: AudioClip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub note_id: Uuid,
    pub text: String,
}

pub fn begin<S: DataStore>(store: &S, id: &Uuid, clip: AudioClip) -> Result<TranscriptionRequest> {
    note_of_kind(store, id, NoteKind::Audio, "Transcription")?;
    Ok(TranscriptionRequest { note_id: *id, clip })
}

impl TranscriptionRequest {
    /// Runs the transcriber. Failures become placeholder text.
    pub fn execute(&self, transcriber: &dyn Transcriber) -> Transcript {
        let text = transcriber.transcribe(&self.clip).unwrap_or_else(|e| {
            warn!("transcription for note {} failed: {}", self.note_id, e);
            TRANSCRIPTION_FAILED.to_string()
        });
        Transcript {
            note_id: self.note_id,
            text,
        }
    }
}

pub fn complete<S: DataStore>(store: &mut S, transcript: Transcript) -> Result<CmdResult> {
    let title = format!("Audio Note - {}", timestamp_label(&Local::now()));
    let mut result = CmdResult::default();

    match store.update(&transcript.note_id, transcript.text, Some(title)) {
        Ok(note) => {
            result.add_message(CmdMessage::success(format!(
                "Transcription complete: {}",
                note.title
            )));
            result.affected_notes.push(note);
        }
        Err(AetherError::NoteNotFound(id)) => {
            warn!("discarding transcript for deleted note {}", id);
            result.add_message(CmdMessage::warning(
                "Transcript discarded: the note was deleted",
            ));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::fixtures::Canned;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    fn clip() -> AudioClip {
        AudioClip::new("audio/webm", vec![1, 2, 3])
    }

    #[test]
    fn applies_transcript_with_title() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Audio);
        let id = fixture.store.active().unwrap();

        let request = begin(&fixture.store, &id, clip()).unwrap();
        let transcript = request.execute(&Canned::ok("buy milk [[Foo]]"));
        let result = complete(&mut fixture.store, transcript).unwrap();

        let note = &result.affected_notes[0];
        assert_eq!(note.content, "buy milk [[Foo]]");
        assert!(note.title.starts_with("Audio Note - "));
        assert!(note.links().is_empty());
    }

    #[test]
    fn failure_becomes_placeholder() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Audio);
        let id = fixture.store.active().unwrap();

        let transcript = begin(&fixture.store, &id, clip())
            .unwrap()
            .execute(&Canned::failing());
        assert_eq!(transcript.text, TRANSCRIPTION_FAILED);
        complete(&mut fixture.store, transcript).unwrap();
        assert_eq!(fixture.store.get(&id).unwrap().content, TRANSCRIPTION_FAILED);
    }

    #[test]
    fn late_result_for_deleted_note_is_discarded() {
        let mut fixture = StoreFixture::new().with_note(NoteKind::Audio);
        let id = fixture.store.active().unwrap();

        let request = begin(&fixture.store, &id, clip()).unwrap();
        fixture.store.delete(&id).unwrap();

        let result = complete(&mut fixture.store, request.execute(&Canned::ok("late"))).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert!(fixture.store.is_empty());
    }

    #[test]
    fn only_audio_notes() {
        let fixture = StoreFixture::new().with_note(NoteKind::Text);
        let id = fixture.store.active().unwrap();
        assert!(begin(&fixture.store, &id, clip()).is_err());
    }
}
