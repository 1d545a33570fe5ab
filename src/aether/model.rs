//! # Domain Model
//!
//! A [`Note`] is the only entity. Its `content` is opaque to the store except
//! for text notes, whose HTML is scanned for `[[Title]]` references (see
//! [`crate::links`]).
//!
//! | kind   | content                         | default content        |
//! |--------|---------------------------------|------------------------|
//! | Text   | HTML produced by the editor     | heading + "Start writing..." |
//! | Audio  | plain transcript text           | empty                  |
//! | Sketch | `data:image/...;base64,` URL    | empty                  |
//!
//! ## Timestamps
//!
//! `created_at` is fixed at creation. `updated_at` must strictly increase on
//! every mutation, even when two mutations land within the resolution of the
//! system clock, so mutations go through [`next_timestamp`].
//!
//! ## HTML helpers
//!
//! The text surface hands us HTML. [`derive_title`] mirrors what the editor
//! shows as the first block, and [`plain_text`] is the markup-free rendering
//! sent to the summarizer.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const UNTITLED: &str = "Untitled";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>?").expect("valid tag regex"));
static OPEN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([A-Za-z][A-Za-z0-9]*)\b[^>]*>").expect("valid open tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Text,
    Audio,
    Sketch,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Text => "text",
            NoteKind::Audio => "audio",
            NoteKind::Sketch => "sketch",
        }
    }

    pub fn default_title(&self) -> String {
        format!("Untitled {} note", self.as_str())
    }

    pub fn default_content(&self) -> String {
        match self {
            NoteKind::Text => format!("<h1>{}</h1><p>Start writing...</p>", self.default_title()),
            NoteKind::Audio | NoteKind::Sketch => String::new(),
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "t" => Ok(NoteKind::Text),
            "audio" | "a" => Ok(NoteKind::Audio),
            "sketch" | "s" => Ok(NoteKind::Sketch),
            other => Err(format!(
                "Unknown note kind: {} (expected text, audio or sketch)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
    // Derived from content by the store, never set by callers
    pub(crate) links: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(kind: NoteKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: kind.default_title(),
            content: kind.default_content(),
            kind,
            links: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Outgoing link targets, in order of appearance in the content.
    pub fn links(&self) -> &[Uuid] {
        &self.links
    }

    /// Stamps a mutation, keeping `updated_at` strictly increasing.
    pub(crate) fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }
}

/// Returns "now", or the smallest representable step after `previous` when
/// the clock has not advanced past it.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

/// Human-readable stamp used in generated titles ("Sketch - 10/18/2026, 3:04:05 PM").
pub fn timestamp_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Title of a text note: the text of its first block, or [`UNTITLED`].
pub fn derive_title(html: &str) -> String {
    let trimmed = html.trim_start();

    let block = match OPEN_TAG_RE.captures(trimmed) {
        Some(caps) => match (caps.get(0), caps.get(1)) {
            (Some(open), Some(name)) => {
                let rest = &trimmed[open.end()..];
                let close = format!("</{}", name.as_str().to_ascii_lowercase());
                // ASCII lowercasing keeps byte offsets aligned with `rest`
                match rest.to_ascii_lowercase().find(&close) {
                    Some(pos) => &rest[..pos],
                    None => rest,
                }
            }
            _ => trimmed,
        },
        None => trimmed.lines().next().unwrap_or_default(),
    };

    let text = collapse_whitespace(&decode_entities(&TAG_RE.replace_all(block, "")));
    if text.is_empty() {
        UNTITLED.to_string()
    } else {
        text
    }
}

/// Markup-free rendering of HTML content: every tag becomes a space.
pub fn plain_text(html: &str) -> String {
    decode_entities(&TAG_RE.replace_all(html, " "))
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
