use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{derive_title, NoteKind};
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::note_of_kind;

/// Ingests HTML from the text editing surface.
///
/// The title always follows the first block of the document.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid, html: String) -> Result<CmdResult> {
    note_of_kind(store, id, NoteKind::Text, "Text editing")?;

    let title = derive_title(&html);
    let note = store.update(id, html, Some(title))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note saved: {} ({} links)",
        note.title,
        note.links().len()
    )));
    result.affected_notes.push(note);
    Ok(result)
}
