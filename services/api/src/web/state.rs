//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use std::sync::Arc;
use video_summarizer_core::{
    ports::{CompletionProvider, TranscriptProvider},
    SummaryGenerator, SummaryPipeline, TranscriptFetcher,
};

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
/// Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transcript_adapter: Arc<dyn TranscriptProvider>,
    pub summary_adapter: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Assembles the request orchestrator from the configured adapters and timeouts.
    pub fn pipeline(&self) -> SummaryPipeline {
        SummaryPipeline::new(
            TranscriptFetcher::new(self.transcript_adapter.clone(), self.config.transcript_timeout),
            SummaryGenerator::new(self.summary_adapter.clone(), self.config.summary_timeout),
        )
    }
}
