//! services/api/src/web/pages.rs
//!
//! Handlers for the browser-facing HTML endpoints.

use axum::{
    extract::{Form, FromRequest, Json, Query, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::web::{
    page::{render_index, render_outcome},
    rest::{summarize_json, SummarizeRequest},
    state::AppState,
    summarize::{outcome_status, run_summary},
};

/// The `video` parameter, from either the query string or a submitted form.
#[derive(Debug, Deserialize)]
pub struct VideoParams {
    pub video: Option<String>,
}

/// GET / - the empty submission form.
pub async fn index_handler() -> Html<String> {
    Html(render_index())
}

/// GET /summarize?video=<reference>
pub async fn summarize_query_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<VideoParams>,
) -> impl IntoResponse {
    summarize_page(&app_state, params.video.unwrap_or_default()).await
}

/// POST /summarize with either a `video` form field, answered with the page,
/// or a JSON `{ "videoUrl": ... }` body, answered with JSON.
pub async fn summarize_form_handler(
    State(app_state): State<Arc<AppState>>,
    request: Request,
) -> Response {
    if has_json_body(request.headers()) {
        let payload = Json::<SummarizeRequest>::from_request(request, &()).await;
        return summarize_json(&app_state, payload).await;
    }

    match Form::<VideoParams>::from_request(request, &()).await {
        Ok(Form(params)) => summarize_page(&app_state, params.video.unwrap_or_default())
            .await
            .into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn has_json_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

async fn summarize_page(app_state: &AppState, reference: String) -> (StatusCode, Html<String>) {
    let outcome = run_summary(app_state, &reference).await;
    (outcome_status(&outcome), Html(render_outcome(&reference, &outcome)))
}

/// GET /health
pub async fn health_handler() -> &'static str {
    "ok"
}
