//! crates/video_summarizer_core/src/pipeline.rs
//!
//! The request orchestrator. A summarize request moves through
//! `Received -> TranscriptFetched -> Summarized -> Rendered`, or drops into
//! `Failed` from any non-terminal state.

use chrono::Utc;
use std::fmt;
use tracing::{debug, info};

use crate::domain::{SummaryReport, VideoId};
use crate::error::{ErrorKind, SummarizeError};
use crate::summary::SummaryGenerator;
use crate::transcript::TranscriptFetcher;

//=========================================================================================
// Request State Machine
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    TranscriptFetched,
    Summarized,
    Rendered,
    Failed(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Illegal request state transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: RequestState,
    pub to: RequestState,
}

impl RequestState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Rendered | RequestState::Failed(_))
    }

    /// Moves to `next` if the state machine allows it.
    pub fn advance(self, next: RequestState) -> Result<RequestState, InvalidTransition> {
        use RequestState::*;
        let allowed = match (self, next) {
            (Received, TranscriptFetched) => true,
            (TranscriptFetched, Summarized) => true,
            (Summarized, Rendered) => true,
            (from, Failed(_)) => !from.is_terminal(),
            _ => false,
        };
        if allowed {
            Ok(next)
        } else {
            Err(InvalidTransition { from: self, to: next })
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Received => f.write_str("received"),
            RequestState::TranscriptFetched => f.write_str("transcript_fetched"),
            RequestState::Summarized => f.write_str("summarized"),
            RequestState::Rendered => f.write_str("rendered"),
            RequestState::Failed(kind) => write!(f, "failed({kind})"),
        }
    }
}

//=========================================================================================
// Orchestrator
//=========================================================================================

/// Runs one summarize request from raw reference to report.
#[derive(Clone)]
pub struct SummaryPipeline {
    fetcher: TranscriptFetcher,
    generator: SummaryGenerator,
}

impl SummaryPipeline {
    pub fn new(fetcher: TranscriptFetcher, generator: SummaryGenerator) -> Self {
        Self { fetcher, generator }
    }

    /// Parses the reference, fetches the transcript and summarizes it.
    ///
    /// The returned state is `Summarized` on success or `Failed` with the
    /// kind of the returned error; rendering is left to the caller.
    pub async fn run(&self, reference: &str) -> (RequestState, Result<SummaryReport, SummarizeError>) {
        let mut state = RequestState::Received;
        let result = self.drive(reference, &mut state).await;
        if let Err(e) = &result {
            state = transition(state, RequestState::Failed(e.kind()), None);
        }
        (state, result)
    }

    async fn drive(
        &self,
        reference: &str,
        state: &mut RequestState,
    ) -> Result<SummaryReport, SummarizeError> {
        let video_id = VideoId::parse(reference)?;
        debug!(video_id = %video_id, state = %state, "Video reference parsed");

        let transcript = self.fetcher.fetch(&video_id).await?;
        *state = transition(*state, RequestState::TranscriptFetched, Some(&video_id));

        let summary = self.generator.generate(&transcript).await?;
        *state = transition(*state, RequestState::Summarized, Some(&video_id));

        info!(
            video_id = %video_id,
            transcript_chars = transcript.as_str().len(),
            summary_chars = summary.as_str().len(),
            "Summary generated"
        );

        Ok(SummaryReport {
            video_id,
            transcript,
            summary,
            generated_at: Utc::now(),
        })
    }
}

/// Applies a transition the orchestrator knows to be legal, logging it.
fn transition(from: RequestState, to: RequestState, video_id: Option<&VideoId>) -> RequestState {
    match from.advance(to) {
        Ok(next) => {
            debug!(video_id = ?video_id.map(VideoId::as_str), from = %from, to = %next, "Request state changed");
            next
        }
        Err(e) => {
            tracing::error!(error = %e, "Request state machine violated");
            from
        }
    }
}
