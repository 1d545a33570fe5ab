//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the bundled session shell, tests, or any
//! other UI).
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: user-typed selectors (`3`, `.`, a UUID, a title)
//!   become note ids before any command runs
//! - **Owns the session**: the store, the injected collaborators, and the
//!   queue of in-flight remote requests
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## In-flight requests
//!
//! Transcription and summarization are requested now and applied later.
//! [`AetherApi::request_transcription`] and [`AetherApi::request_summary`]
//! only validate and enqueue; [`AetherApi::wait`] runs the collaborators and
//! applies each result to the store as it is at that moment. Results for
//! notes deleted in the meantime are dropped with a warning.

use crate::collab::{ensure_ready, AudioClip, Collaborators};
use crate::commands;
use crate::commands::summarize::SummaryRequest;
use crate::commands::transcribe::TranscriptionRequest;
use crate::error::{AetherError, Result};
use crate::index::NoteSelector;
use crate::seed;
use crate::store::DataStore;
use log::warn;
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum PendingJob {
    Transcription(TranscriptionRequest),
    Summary(SummaryRequest),
}

impl PendingJob {
    pub fn note_id(&self) -> Uuid {
        match self {
            PendingJob::Transcription(req) => req.note_id,
            PendingJob::Summary(req) => req.note_id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PendingJob::Transcription(_) => "transcription",
            PendingJob::Summary(_) => "summary",
        }
    }
}

/// The main API facade for note operations.
///
/// Generic over `DataStore` so sessions and tests share one code path.
pub struct AetherApi<S: DataStore> {
    store: S,
    collaborators: Collaborators,
    pending: Vec<PendingJob>,
    config_dir: Option<PathBuf>,
}

impl<S: DataStore> AetherApi<S> {
    pub fn new(store: S, collaborators: Collaborators) -> Self {
        Self {
            store,
            collaborators,
            pending: Vec::new(),
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn seed_welcome(&mut self) -> Result<commands::CmdResult> {
        let notes = seed::seed_welcome(&mut self.store)?;
        Ok(commands::CmdResult::default().with_affected_notes(notes))
    }

    pub fn create_note(&mut self, kind: crate::model::NoteKind) -> commands::CmdResult {
        commands::create::run(&mut self.store, kind)
    }

    pub fn list_notes(&self, filter: &NoteFilter) -> commands::CmdResult {
        commands::list::run(&self.store, filter)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_all(selectors)?;
        commands::view::run(&self.store, &ids)
    }

    /// Selects a note; `None` clears the selection.
    pub fn select_note(&mut self, selector: Option<&str>) -> Result<commands::CmdResult> {
        let id = selector.map(|s| self.resolve(s)).transpose()?;
        commands::select::run(&mut self.store, id)
    }

    pub fn update_note(
        &mut self,
        selector: &str,
        content: String,
        title: Option<String>,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::update::run(&mut self.store, &id, content, title)
    }

    pub fn edit_text(&mut self, selector: &str, html: String) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::edit::run(&mut self.store, &id, html)
    }

    pub fn save_sketch(&mut self, selector: &str, data_url: String) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::sketch::run(&mut self.store, &id, data_url)
    }

    pub fn request_transcription(
        &mut self,
        selector: &str,
        clip: AudioClip,
    ) -> Result<commands::CmdResult> {
        ensure_ready(self.collaborators.transcriber.as_ref())?;
        let id = self.resolve(selector)?;
        let request = commands::transcribe::begin(&self.store, &id, clip)?;
        Ok(self.enqueue(PendingJob::Transcription(request)))
    }

    pub fn request_summary(&mut self, selector: &str) -> Result<commands::CmdResult> {
        ensure_ready(self.collaborators.summarizer.as_ref())?;
        let id = self.resolve(selector)?;
        let request = commands::summarize::begin(&self.store, &id)?;
        Ok(self.enqueue(PendingJob::Summary(request)))
    }

    pub fn pending_jobs(&self) -> &[PendingJob] {
        &self.pending
    }

    /// Runs every queued request and applies the results in request order.
    pub fn wait(&mut self) -> Result<commands::CmdResult> {
        let jobs = std::mem::take(&mut self.pending);
        let mut result = commands::CmdResult::default();
        if jobs.is_empty() {
            result.add_message(CmdMessage::info("Nothing pending"));
            return Ok(result);
        }

        // A failing job is reported and the rest still run
        for job in jobs {
            let (label, note_id) = (job.label(), job.note_id());
            let done = match job {
                PendingJob::Transcription(request) => {
                    let transcript = request.execute(self.collaborators.transcriber.as_ref());
                    commands::transcribe::complete(&mut self.store, transcript)
                }
                PendingJob::Summary(request) => {
                    let summary = request.execute(self.collaborators.summarizer.as_ref());
                    commands::summarize::complete(&mut self.store, summary)
                }
            };
            match done {
                Ok(done) => {
                    result.affected_notes.extend(done.affected_notes);
                    result.messages.extend(done.messages);
                }
                Err(e) => {
                    warn!("could not apply {} for note {}: {}", label, note_id, e);
                    result.add_message(CmdMessage::error(format!(
                        "Could not apply {}: {}",
                        label, e
                    )));
                }
            }
        }
        Ok(result)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_all(selectors)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn graph(&self) -> commands::CmdResult {
        commands::graph::run(&self.store)
    }

    pub fn resolve_title(&self, title: &str) -> Result<commands::CmdResult> {
        commands::resolve::run(&self.store, title)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .as_ref()
            .ok_or_else(|| AetherError::Config("No config directory available".to_string()))?;
        commands::config::run(dir, action)
    }

    fn enqueue(&mut self, job: PendingJob) -> commands::CmdResult {
        let mut result = commands::CmdResult::default();
        if let Ok(note) = self.store.get(&job.note_id()) {
            result.add_message(CmdMessage::info(format!(
                "Requested {} for: {}",
                job.label(),
                note.title
            )));
        }
        self.pending.push(job);
        result
    }

    fn resolve(&self, input: &str) -> Result<Uuid> {
        let selector = NoteSelector::from_str(input).map_err(AetherError::Api)?;
        commands::helpers::resolve_selector(&self.store, &selector)
    }

    /// Resolves every selector, keeping the first occurrence of each note.
    fn resolve_all<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<Uuid>> {
        let selectors = parse_selectors(inputs)?;
        let mut ids = commands::helpers::resolve_selectors(&self.store, &selectors)?;
        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(*id));
        Ok(ids)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    let parsed = inputs
        .iter()
        .map(|s| NoteSelector::from_str(s.as_ref()).map_err(AetherError::Api))
        .collect::<Result<Vec<_>>>()?;

    // Several words that are not all indexes/ids are one multi-word title
    if parsed.len() > 1 && parsed.iter().any(|s| matches!(s, NoteSelector::Title(_))) {
        let title = inputs
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        return Ok(vec![NoteSelector::Title(title)]);
    }

    Ok(parsed)
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::NoteFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
