//! # Collaborator Capabilities
//!
//! Everything outside the note store (transcription, summarization, graph
//! rendering) is reached through the traits in this module. Implementations
//! are handed to the API at construction time; nothing is looked up globally.
//!
//! Each capability reports a [`SurfaceStatus`]. Callers check readiness up
//! front with [`ensure_ready`] instead of polling for a library to appear.
//!
//! Service failures are reported as [`ServiceError`]. The command layer turns
//! them into placeholder text, so they never reach the store as errors.

use crate::error::{AetherError, Result};
use crate::graph::GraphProjection;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceStatus {
    Loading,
    Ready,
    Failed(String),
}

impl fmt::Display for SurfaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceStatus::Loading => write!(f, "loading"),
            SurfaceStatus::Ready => write!(f, "ready"),
            SurfaceStatus::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("request failed: {0}")]
    Failed(String),
}

pub trait Capability {
    fn name(&self) -> &str;

    fn status(&self) -> SurfaceStatus {
        SurfaceStatus::Ready
    }
}

/// Recorded audio handed to a [`Transcriber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl AudioClip {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

pub trait Transcriber: Capability {
    fn transcribe(&self, clip: &AudioClip) -> std::result::Result<String, ServiceError>;
}

pub trait Summarizer: Capability {
    fn summarize(&self, text: &str) -> std::result::Result<String, ServiceError>;
}

pub trait GraphRenderer: Capability {
    fn render(&self, graph: &GraphProjection) -> std::result::Result<String, ServiceError>;
}

/// The remote services a session talks to.
pub struct Collaborators {
    pub transcriber: Box<dyn Transcriber>,
    pub summarizer: Box<dyn Summarizer>,
}

impl Collaborators {
    pub fn new(transcriber: Box<dyn Transcriber>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            transcriber,
            summarizer,
        }
    }

    /// No backend configured: both services report themselves as failed.
    pub fn offline() -> Self {
        Self::new(Box::new(Offline), Box::new(Offline))
    }
}

pub fn ensure_ready<C: Capability + ?Sized>(capability: &C) -> Result<()> {
    match capability.status() {
        SurfaceStatus::Ready => Ok(()),
        status => Err(AetherError::NotReady(format!(
            "{} is {}",
            capability.name(),
            status
        ))),
    }
}

struct Offline;

impl Capability for Offline {
    fn name(&self) -> &str {
        "offline service"
    }

    fn status(&self) -> SurfaceStatus {
        SurfaceStatus::Failed("no backend configured".to_string())
    }
}

impl Transcriber for Offline {
    fn transcribe(&self, _clip: &AudioClip) -> std::result::Result<String, ServiceError> {
        Err(ServiceError::Unavailable("no backend configured".into()))
    }
}

impl Summarizer for Offline {
    fn summarize(&self, _text: &str) -> std::result::Result<String, ServiceError> {
        Err(ServiceError::Unavailable("no backend configured".into()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Returns a canned response, or a failure when `response` is `None`.
    pub struct Canned {
        pub response: Option<String>,
        pub status: SurfaceStatus,
    }

    impl Canned {
        pub fn ok(response: &str) -> Self {
            Self {
                response: Some(response.to_string()),
                status: SurfaceStatus::Ready,
            }
        }

        pub fn failing() -> Self {
            Self {
                response: None,
                status: SurfaceStatus::Ready,
            }
        }

        pub fn loading() -> Self {
            Self {
                response: None,
                status: SurfaceStatus::Loading,
            }
        }

        fn reply(&self) -> std::result::Result<String, ServiceError> {
            self.response
                .clone()
                .ok_or_else(|| ServiceError::Failed("canned failure".into()))
        }
    }

    impl Capability for Canned {
        fn name(&self) -> &str {
            "canned service"
        }

        fn status(&self) -> SurfaceStatus {
            self.status.clone()
        }
    }

    impl Transcriber for Canned {
        fn transcribe(&self, _clip: &AudioClip) -> std::result::Result<String, ServiceError> {
            self.reply()
        }
    }

    impl Summarizer for Canned {
        fn summarize(&self, _text: &str) -> std::result::Result<String, ServiceError> {
            self.reply()
        }
    }

    pub fn canned(transcript: &str, summary: &str) -> Collaborators {
        Collaborators::new(
            Box::new(Canned::ok(transcript)),
            Box::new(Canned::ok(summary)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::Canned;
    use super::*;

    #[test]
    fn test_ensure_ready() {
        assert!(ensure_ready(&Canned::ok("x")).is_ok());

        let err = ensure_ready(&Canned::loading()).unwrap_err();
        assert!(err.to_string().contains("canned service is loading"));
    }

    #[test]
    fn test_offline_is_not_ready() {
        let offline = Collaborators::offline();
        assert!(ensure_ready(offline.summarizer.as_ref()).is_err());
        assert!(offline.transcriber.transcribe(&AudioClip::new("audio/webm", vec![])).is_err());
    }
}
