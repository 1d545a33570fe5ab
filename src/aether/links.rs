//! # Inline Note References
//!
//! Text notes link to each other with `[[Title]]`. References are matched
//! non-greedily and never span lines, so `[[a]] [[b]]` yields two references
//! and an unterminated `[[` yields none.
//!
//! Resolution is a case-insensitive exact title match. When several notes
//! share a title, the first candidate (creation order) wins. References that
//! resolve to nothing are dropped rather than stored as placeholders.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::model::Note;

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid reference regex"));

/// Inner strings of every `[[...]]` reference, in order of appearance.
pub fn parse_references(content: &str) -> Vec<&str> {
    REFERENCE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Finds the first note whose title equals `title`, ignoring case.
pub fn find_by_title<'a, I>(candidates: I, title: &str) -> Option<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    let wanted = title.to_lowercase();
    candidates
        .into_iter()
        .find(|note| note.title.to_lowercase() == wanted)
}

/// Resolves the references in `content` against `candidates`.
///
/// `candidates` must iterate in a stable order; it is re-walked per reference.
pub fn resolve_links<'a, I>(content: &str, candidates: I, dedup: bool) -> Vec<Uuid>
where
    I: IntoIterator<Item = &'a Note> + Clone,
{
    let mut links = Vec::new();
    for reference in parse_references(content) {
        if let Some(target) = find_by_title(candidates.clone(), reference) {
            if dedup && links.contains(&target.id) {
                continue;
            }
            links.push(target.id);
        }
    }
    links
}
