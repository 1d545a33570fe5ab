use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Makes `id` the active note, or clears the selection with `None`.
pub fn run<S: DataStore>(store: &mut S, id: Option<Uuid>) -> Result<CmdResult> {
    store.set_active(id)?;

    let mut result = CmdResult::default();
    match id {
        Some(id) => {
            let note = store.get(&id)?;
            result.add_message(CmdMessage::info(format!("Active note: {}", note.title)));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::info("No active note")),
    }
    Ok(result)
}
