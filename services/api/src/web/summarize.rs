//! services/api/src/web/summarize.rs
//!
//! The request path shared by the HTML and JSON endpoints: run the pipeline
//! inside a request span, log the failure at the right level, and hand back a
//! `SummaryOutcome` for rendering.

use axum::http::StatusCode;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;
use video_summarizer_core::{domain::SummaryOutcome, error::ErrorKind, RequestState};

use crate::web::state::AppState;

/// The HTTP status for a failure kind: caller-side problems are 400, upstream
/// problems are 502.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    if kind.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    }
}

pub fn outcome_status(outcome: &SummaryOutcome) -> StatusCode {
    match outcome {
        SummaryOutcome::Success(_) => StatusCode::OK,
        SummaryOutcome::Failure { kind, .. } => status_for(*kind),
    }
}

/// Runs one summarize request for `reference`.
pub async fn run_summary(app_state: &AppState, reference: &str) -> SummaryOutcome {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id, reference = %reference);

    async move {
        let (state, result) = app_state.pipeline().run(reference).await;

        if let Err(e) = &result {
            if e.kind().is_client_error() {
                warn!(kind = %e.kind(), error = %e, "Summarize request rejected");
            } else {
                error!(kind = %e.kind(), error = %e, "Summarize request failed upstream");
            }
        }

        let outcome = SummaryOutcome::from(result);
        if outcome.is_success() {
            match state.advance(RequestState::Rendered) {
                Ok(rendered) => debug!(state = %rendered, "Summary handed to renderer"),
                Err(e) => error!(error = %e, "Request state machine violated"),
            }
        }
        outcome
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_their_status_classes() {
        assert_eq!(status_for(ErrorKind::InvalidReference), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::TranscriptUnavailable), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::EmptyInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::ProviderError), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorKind::SummarizationError), StatusCode::BAD_GATEWAY);
    }
}
