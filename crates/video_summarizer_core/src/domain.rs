//! crates/video_summarizer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! None of these outlive a single request/response cycle.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::ErrorKind;

/// The canonical 11-character YouTube video identifier.
///
/// The only way to obtain one is [`VideoId::parse`], so every value matches
/// `[A-Za-z0-9_-]{11}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(pub(crate) String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single timed caption snippet, in the order the provider returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Length of the snippet, in seconds.
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// All transcript segments concatenated into one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptText(String);

impl TranscriptText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Joins segment text with a single space, keeping provider order.
    pub fn from_segments(segments: &[TranscriptSegment]) -> Self {
        let joined = segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The AI-generated summary. The only text the user actually asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText(String);

impl SummaryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Everything a successful request produces.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub video_id: VideoId,
    pub transcript: TranscriptText,
    pub summary: SummaryText,
    pub generated_at: DateTime<Utc>,
}

/// The result of one request as seen by the renderers.
#[derive(Debug, Clone)]
pub enum SummaryOutcome {
    Success(SummaryReport),
    Failure { kind: ErrorKind, message: String },
}

impl SummaryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryOutcome::Success(_))
    }
}

impl From<Result<SummaryReport, crate::error::SummarizeError>> for SummaryOutcome {
    fn from(result: Result<SummaryReport, crate::error::SummarizeError>) -> Self {
        match result {
            Ok(report) => SummaryOutcome::Success(report),
            Err(e) => SummaryOutcome::Failure {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}
