use crate::config::AetherConfig;
use crate::graph::GraphProjection;
use crate::index::DisplayNote;
use crate::model::Note;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod graph;
pub mod helpers;
pub mod list;
pub mod resolve;
pub mod select;
pub mod sketch;
pub mod summarize;
pub mod transcribe;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub graph: Option<GraphProjection>,
    pub config: Option<AetherConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_graph(mut self, graph: GraphProjection) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn with_config(mut self, config: AetherConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
