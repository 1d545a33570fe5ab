//! # Display Indexes
//!
//! Notes are identified by UUIDs, which nobody wants to type. The sidebar
//! lists notes most-recently-updated first and numbers them `1..n`; those
//! numbers are what users type. They are recomputed on every listing, so an
//! index is only meaningful against the listing it came from.
//!
//! A [`NoteSelector`] is anything a user can type to pick a note:
//!
//! - `3`      display index
//! - `.`      the active note
//! - a UUID   exact id
//! - anything else is a title, resolved with first-match-wins semantics

use crate::model::Note;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const ACTIVE_MARKER: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Active,
    Index(DisplayIndex),
    Id(Uuid),
    Title(String),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Active => write!(f, "active note"),
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Id(id) => write!(f, "{}", id),
            NoteSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty note selector".to_string());
        }
        if s == ACTIVE_MARKER {
            return Ok(NoteSelector::Active);
        }
        if let Ok(idx) = DisplayIndex::from_str(s) {
            return Ok(NoteSelector::Index(idx));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(NoteSelector::Id(id));
        }
        Ok(NoteSelector::Title(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
    pub is_active: bool,
}

/// Assigns display indexes, most recently updated first.
///
/// `notes` must be in creation order, as returned by `DataStore::list`.
pub fn index_notes(mut notes: Vec<Note>, active: Option<Uuid>) -> Vec<DisplayNote> {
    // `notes` arrives in creation order; reversing before the stable sort puts
    // the later-created note first on equal timestamps
    notes.reverse();
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            is_active: Some(note.id) == active,
            index: DisplayIndex(i + 1),
            note,
        })
        .collect()
}
