use crate::commands::{CmdMessage, CmdResult};
use crate::model::NoteKind;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, kind: NoteKind) -> CmdResult {
    let note = store.create(kind);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        note.title
    )));
    result.affected_notes.push(note);
    result
}
