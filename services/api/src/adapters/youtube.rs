//! services/api/src/adapters/youtube.rs
//!
//! The concrete `TranscriptProvider` backed by `yt-transcript-rs`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::{debug, warn};
use video_summarizer_core::{
    domain::{TranscriptSegment, VideoId},
    ports::{PortError, PortResult, TranscriptProvider},
};
use yt_transcript_rs::{
    errors::CouldNotRetrieveTranscriptReason, CouldNotRetrieveTranscript, FetchedTranscript,
    Transcript, TranscriptList, YouTubeTranscriptApi,
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TranscriptProvider` using YouTube's caption tracks.
#[derive(Clone)]
pub struct YouTubeTranscriptAdapter {
    api: YouTubeTranscriptApi,
    http: reqwest::Client,
    languages: Vec<String>,
}

impl YouTubeTranscriptAdapter {
    /// Creates a new `YouTubeTranscriptAdapter`.
    ///
    /// `languages` is the caption language preference, most preferred first.
    /// Every request to YouTube is bounded by `timeout` and, when given, sent
    /// through `proxy_url`.
    pub fn new(
        languages: Vec<String>,
        timeout: Duration,
        proxy_url: Option<&str>,
    ) -> PortResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout);
        if let Some(proxy_url) = proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| PortError::Unexpected(format!("Invalid YouTube proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }
        let http = builder
            .build()
            .map_err(|e| PortError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;

        let api = YouTubeTranscriptApi::new(None, None, Some(http.clone()))
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(Self {
            api,
            http,
            languages,
        })
    }

    /// Picks the caption track to download.
    ///
    /// Requested languages are tried in order, manually created tracks before
    /// generated ones. Without a match the lowest language code wins, again
    /// preferring manual tracks.
    fn select_track(&self, list: &TranscriptList) -> Result<Transcript, CouldNotRetrieveTranscript> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        match list.find_transcript(&languages) {
            Ok(track) => Ok(track),
            Err(CouldNotRetrieveTranscript {
                video_id,
                reason: Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }),
            }) => {
                let fallback = fallback_track(list).ok_or(CouldNotRetrieveTranscript {
                    video_id,
                    reason: Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled),
                })?;
                warn!(
                    video_id = %list.video_id,
                    language = %fallback.language_code,
                    requested = ?self.languages,
                    "No caption track in the requested languages, using another one"
                );
                Ok(fallback)
            }
            Err(e) => Err(e),
        }
    }
}

fn fallback_track(list: &TranscriptList) -> Option<Transcript> {
    let lowest = |tracks: &std::collections::HashMap<String, Transcript>| {
        tracks
            .values()
            .min_by(|a, b| a.language_code.cmp(&b.language_code))
            .cloned()
    };
    lowest(&list.manually_created_transcripts).or_else(|| lowest(&list.generated_transcripts))
}

fn into_segments(transcript: FetchedTranscript) -> Vec<TranscriptSegment> {
    transcript
        .snippets
        .into_iter()
        .map(|snippet| TranscriptSegment::new(snippet.text, snippet.start, snippet.duration))
        .collect()
}

/// Maps a retrieval failure onto the port taxonomy.
///
/// Anything that says the video has no usable transcript becomes `NotFound`.
/// Blocks, request failures and unparsable responses are `Unexpected`.
pub(crate) fn map_retrieval_error(e: CouldNotRetrieveTranscript) -> PortError {
    use CouldNotRetrieveTranscriptReason::*;

    let Some(reason) = &e.reason else {
        return PortError::Unexpected(e.to_string());
    };
    match reason {
        TranscriptsDisabled => {
            PortError::NotFound("transcripts are disabled for this video".to_string())
        }
        NoTranscriptFound { .. } => {
            PortError::NotFound("no caption track exists for this video".to_string())
        }
        VideoUnavailable => PortError::NotFound("video is unavailable".to_string()),
        VideoUnplayable { reason, .. } => PortError::NotFound(format!(
            "video is unavailable: {}",
            reason.as_deref().unwrap_or("unplayable")
        )),
        AgeRestricted => PortError::NotFound("video is age-restricted".to_string()),
        InvalidVideoId => PortError::NotFound("YouTube does not know this video ID".to_string()),
        IpBlocked(_) => PortError::Unexpected(
            "YouTube is blocking requests from this IP".to_string(),
        ),
        RequestBlocked(_) => PortError::Unexpected(
            "YouTube is blocking or rate limiting requests".to_string(),
        ),
        YouTubeRequestFailed(detail) => {
            PortError::Unexpected(format!("Request to YouTube failed: {}", detail))
        }
        YouTubeDataUnparsable(detail) => {
            PortError::Unexpected(format!("Failed to parse the YouTube response: {}", detail))
        }
        FailedToCreateConsentCookie => {
            PortError::Unexpected("Failed to accept the YouTube cookie consent".to_string())
        }
        TranslationUnavailable(detail) | TranslationLanguageUnavailable(detail) => {
            PortError::Unexpected(detail.clone())
        }
    }
}

//=========================================================================================
// `TranscriptProvider` Trait Implementation
//=========================================================================================

#[async_trait]
impl TranscriptProvider for YouTubeTranscriptAdapter {
    /// Retrieves the caption segments of a video in playback order.
    async fn get_transcript(&self, video_id: &VideoId) -> PortResult<Vec<TranscriptSegment>> {
        let list = self
            .api
            .list_transcripts(video_id.as_str())
            .await
            .map_err(map_retrieval_error)?;

        let track = self.select_track(&list).map_err(map_retrieval_error)?;
        debug!(
            video_id = %video_id,
            language = %track.language_code,
            generated = track.is_generated,
            "Downloading caption track"
        );

        let transcript = track
            .fetch(&self.http, false)
            .await
            .map_err(map_retrieval_error)?;
        Ok(into_segments(transcript))
    }
}
