use thiserror::Error;
use uuid::Uuid;

use crate::model::NoteKind;

#[derive(Error, Debug)]
pub enum AetherError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("{operation} is only available for {expected} notes (this is a {actual} note)")]
    UnsupportedKind {
        operation: &'static str,
        expected: NoteKind,
        actual: NoteKind,
    },

    #[error("Collaborator not ready: {0}")]
    NotReady(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AetherError>;
