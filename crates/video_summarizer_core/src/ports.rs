//! crates/video_summarizer_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete transcript and completion providers.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{TranscriptSegment, VideoId};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., HTTP, JSON).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Retrieves the caption segments of a video, in playback order.
    ///
    /// `PortError::NotFound` means the video has no usable transcript.
    async fn get_transcript(&self, video_id: &VideoId) -> PortResult<Vec<TranscriptSegment>>;
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a single prompt and returns the generated text.
    async fn complete(&self, prompt: &str) -> PortResult<String>;
}
