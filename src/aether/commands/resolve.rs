use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Shows which note a `[[title]]` reference would link to.
pub fn run<S: DataStore>(store: &S, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.resolve_title(title) {
        Some(id) => {
            let note = store.get(&id)?;
            result.add_message(CmdMessage::info(format!(
                "[[{}]] -> {} ({})",
                title, note.title, note.id
            )));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::warning(format!(
            "[[{}]] does not resolve to any note",
            title
        ))),
    }
    Ok(result)
}
