//! crates/video_summarizer_core/src/error.rs
//!
//! The failure taxonomy of a summarize request.

use std::fmt;

/// Every way a summarize request can fail.
///
/// The `Display` output is the message shown to the end user, so each variant
/// names its cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummarizeError {
    #[error("Invalid YouTube URL or video ID: {0:?}")]
    InvalidReference(String),

    #[error("No transcript is available for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Error retrieving transcript: {0}")]
    TranscriptProvider(String),

    #[error("The transcript is empty; there is nothing to summarize")]
    EmptyInput,

    #[error("Error generating summary: {0}")]
    Summarization(String),
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::InvalidReference(_) => ErrorKind::InvalidReference,
            SummarizeError::TranscriptUnavailable { .. } => ErrorKind::TranscriptUnavailable,
            SummarizeError::TranscriptProvider(_) => ErrorKind::ProviderError,
            SummarizeError::EmptyInput => ErrorKind::EmptyInput,
            SummarizeError::Summarization(_) => ErrorKind::SummarizationError,
        }
    }
}

/// The failure kind without its details, used for status mapping and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidReference,
    TranscriptUnavailable,
    ProviderError,
    EmptyInput,
    SummarizationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidReference => "invalid_reference",
            ErrorKind::TranscriptUnavailable => "transcript_unavailable",
            ErrorKind::ProviderError => "provider_error",
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::SummarizationError => "summarization_error",
        }
    }

    /// Whether the caller's input (or the video itself) caused the failure,
    /// as opposed to one of the upstream services.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidReference | ErrorKind::TranscriptUnavailable | ErrorKind::EmptyInput
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
