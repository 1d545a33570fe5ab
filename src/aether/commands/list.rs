use crate::commands::CmdResult;
use crate::index::DisplayNote;
use crate::model::{plain_text, NoteKind};
use crate::store::DataStore;

use super::helpers::indexed_notes;

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub kind: Option<NoteKind>,
    pub search_term: Option<String>,
}

pub fn run<S: DataStore>(store: &S, filter: &NoteFilter) -> CmdResult {
    let mut listed: Vec<DisplayNote> = indexed_notes(store)
        .into_iter()
        .filter(|dn| filter.kind.map_or(true, |kind| dn.note.kind == kind))
        .collect();

    if let Some(term) = &filter.search_term {
        let term_lower = term.to_lowercase();
        let mut matches: Vec<(DisplayNote, u8)> = listed
            .into_iter()
            .filter_map(|dn| {
                let title_lower = dn.note.title.to_lowercase();
                let score = if title_lower == term_lower {
                    1
                } else if title_lower.contains(&term_lower) {
                    2
                } else if searchable_content(&dn).contains(&term_lower) {
                    3
                } else {
                    return None;
                };
                Some((dn, score))
            })
            .collect();

        // Best score first; within a score keep sidebar order
        matches.sort_by_key(|(dn, score)| (*score, dn.index));
        listed = matches.into_iter().map(|(dn, _)| dn).collect();
    }

    CmdResult::default().with_listed_notes(listed)
}

fn searchable_content(dn: &DisplayNote) -> String {
    match dn.note.kind {
        NoteKind::Text => plain_text(&dn.note.content).to_lowercase(),
        NoteKind::Audio => dn.note.content.to_lowercase(),
        // Image data is not searchable text
        NoteKind::Sketch => String::new(),
    }
}
