use aether::collab::{AudioClip, Capability, ServiceError, Summarizer, Transcriber};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence regex"));

/// MIME type for a recording, from its file extension.
pub fn audio_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("txt") | Some("vtt") | Some("srt") => "text/plain",
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        _ => "audio/webm",
    }
}

/// Uses the text track of a recording as its transcript.
///
/// Without a speech engine only clips that already carry text (a `.txt`
/// transcript next to the recording) can be transcribed; anything else fails
/// and ends up as the failure placeholder.
pub struct TextTrackTranscriber;

impl Capability for TextTrackTranscriber {
    fn name(&self) -> &str {
        "local transcriber"
    }
}

impl Transcriber for TextTrackTranscriber {
    fn transcribe(&self, clip: &AudioClip) -> Result<String, ServiceError> {
        if clip.mime_type != "text/plain" {
            return Err(ServiceError::Unavailable(format!(
                "no speech engine for {}",
                clip.mime_type
            )));
        }
        let text = String::from_utf8(clip.data.clone())
            .map_err(|e| ServiceError::Failed(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

/// Picks the leading sentences of a text as bullet points.
pub struct ExtractiveSummarizer {
    pub max_points: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self { max_points: 3 }
    }
}

impl Capability for ExtractiveSummarizer {
    fn name(&self) -> &str {
        "local summarizer"
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> Result<String, ServiceError> {
        let points: Vec<String> = SENTENCE_RE
            .find_iter(text)
            .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .take(self.max_points)
            .map(|s| format!("- {}", s))
            .collect();

        if points.is_empty() {
            return Err(ServiceError::Failed("no sentences found".to_string()));
        }
        Ok(points.join("\n"))
    }
}
