use crate::commands::CmdResult;
use crate::error::{AetherError, Result};
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::indexed_notes;

pub fn run<S: DataStore>(store: &S, ids: &[Uuid]) -> Result<CmdResult> {
    let indexed = indexed_notes(store);
    let listed = ids
        .iter()
        .map(|id| {
            indexed
                .iter()
                .find(|dn| &dn.note.id == id)
                .cloned()
                .ok_or(AetherError::NoteNotFound(*id))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_notes(listed))
}
