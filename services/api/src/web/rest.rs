//! services/api/src/web/rest.rs
//!
//! Contains the Axum handler for the JSON API endpoint and the master
//! definition for the OpenAPI specification.

use crate::web::{
    state::AppState,
    summarize::{outcome_status, run_summary},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use video_summarizer_core::{domain::SummaryOutcome, error::ErrorKind};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        summarize_api_handler,
    ),
    components(
        schemas(SummarizeRequest, SummarizeSuccess, SummarizeFailure)
    ),
    tags(
        (name = "Video Summarizer API", description = "Summarize a YouTube video from its transcript.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// The request payload: a YouTube URL or bare video ID.
#[derive(Deserialize, ToSchema)]
pub struct SummarizeRequest {
    #[serde(rename = "videoUrl", default)]
    pub video_url: String,
}

/// The response payload sent after a successful summary.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeSuccess {
    /// Always `"success"`.
    status: String,
    video_id: String,
    transcript: String,
    summary: String,
    generated_at: DateTime<Utc>,
}

/// The response payload sent when any step fails.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeFailure {
    /// Always `"error"`.
    status: String,
    /// One of `invalid_reference`, `transcript_unavailable`, `provider_error`,
    /// `empty_input`, `summarization_error`.
    kind: String,
    error: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Summarize a YouTube video.
///
/// Fetches the video's transcript and returns it together with an AI summary.
#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary generated", body = SummarizeSuccess),
        (status = 400, description = "Invalid reference, malformed body, no transcript, or empty transcript", body = SummarizeFailure),
        (status = 415, description = "The body is not JSON", body = SummarizeFailure),
        (status = 502, description = "The transcript or AI provider failed", body = SummarizeFailure)
    ),
    tag = "Video Summarizer API"
)]
pub async fn summarize_api_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    summarize_json(&app_state, payload).await
}

/// Runs a JSON summarize request, answering a body that cannot be read with
/// the same failure shape as any other rejected reference.
pub async fn summarize_json(
    app_state: &AppState,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let body = SummarizeFailure {
                status: "error".to_string(),
                kind: ErrorKind::InvalidReference.as_str().to_string(),
                error: format!("Invalid request body: {}", rejection.body_text()),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let outcome = run_summary(app_state, &request.video_url).await;
    let status = outcome_status(&outcome);

    match outcome {
        SummaryOutcome::Success(report) => {
            let body = SummarizeSuccess {
                status: "success".to_string(),
                video_id: report.video_id.to_string(),
                transcript: report.transcript.into_inner(),
                summary: report.summary.into_inner(),
                generated_at: report.generated_at,
            };
            (status, Json(body)).into_response()
        }
        SummaryOutcome::Failure { kind, message } => {
            let body = SummarizeFailure {
                status: "error".to_string(),
                kind: kind.as_str().to_string(),
                error: message,
            };
            (status, Json(body)).into_response()
        }
    }
}
