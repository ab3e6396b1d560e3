//! crates/video_summarizer_core/src/transcript.rs
//!
//! The transcript fetcher: one bounded call to the transcript provider, then
//! concatenation of the returned segments.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::{TranscriptText, VideoId};
use crate::error::SummarizeError;
use crate::ports::{PortError, TranscriptProvider};

pub const DEFAULT_TRANSCRIPT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct TranscriptFetcher {
    provider: Arc<dyn TranscriptProvider>,
    timeout: Duration,
}

impl TranscriptFetcher {
    pub fn new(provider: Arc<dyn TranscriptProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Fetches the transcript of `video_id` and joins it into a single text block.
    ///
    /// A video without captions (or with zero non-empty segments) is
    /// `TranscriptUnavailable`; anything else going wrong upstream, including
    /// the timeout, is `TranscriptProvider`.
    pub async fn fetch(&self, video_id: &VideoId) -> Result<TranscriptText, SummarizeError> {
        let call = self.provider.get_transcript(video_id);
        let segments = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(segments)) => segments,
            Ok(Err(PortError::NotFound(reason))) => {
                return Err(SummarizeError::TranscriptUnavailable {
                    video_id: video_id.to_string(),
                    reason,
                })
            }
            Ok(Err(e)) => return Err(SummarizeError::TranscriptProvider(e.to_string())),
            Err(_) => {
                return Err(SummarizeError::TranscriptProvider(
                    PortError::Timeout(self.timeout).to_string(),
                ))
            }
        };

        debug!(video_id = %video_id, segments = segments.len(), "Transcript received");

        let text = TranscriptText::from_segments(&segments);
        if text.is_blank() {
            return Err(SummarizeError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: "the transcript has no text".to_string(),
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TranscriptSegment;
    use crate::error::ErrorKind;
    use crate::ports::PortResult;
    use async_trait::async_trait;

    struct FixedProvider(fn() -> PortResult<Vec<TranscriptSegment>>);

    #[async_trait]
    impl TranscriptProvider for FixedProvider {
        async fn get_transcript(&self, _video_id: &VideoId) -> PortResult<Vec<TranscriptSegment>> {
            (self.0)()
        }
    }

    struct Owned(Vec<TranscriptSegment>);

    #[async_trait]
    impl TranscriptProvider for Owned {
        async fn get_transcript(&self, _video_id: &VideoId) -> PortResult<Vec<TranscriptSegment>> {
            Ok(self.0.clone())
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl TranscriptProvider for HangingProvider {
        async fn get_transcript(&self, _video_id: &VideoId) -> PortResult<Vec<TranscriptSegment>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    fn fetcher(provider: impl TranscriptProvider + 'static) -> TranscriptFetcher {
        TranscriptFetcher::new(Arc::new(provider), Duration::from_secs(5))
    }

    fn video() -> VideoId {
        VideoId::parse("dQw4w9WgXcQ").unwrap()
    }

    #[tokio::test]
    async fn joins_segments_in_provider_order_for_any_count() {
        for n in 1..=12usize {
            let words: Vec<String> = (0..n).rev().map(|i| format!("w{i}")).collect();
            let segments: Vec<TranscriptSegment> = words
                .iter()
                .enumerate()
                .map(|(i, w)| TranscriptSegment::new(w.clone(), i as f64, 1.0))
                .collect();

            let text = fetcher(Owned(segments)).fetch(&video()).await.unwrap();
            assert_eq!(text.as_str(), words.join(" "));
        }
    }

    #[tokio::test]
    async fn zero_segments_is_transcript_unavailable() {
        let err = fetcher(FixedProvider(|| Ok(Vec::new())))
            .fetch(&video())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TranscriptUnavailable);
    }

    #[tokio::test]
    async fn not_found_is_transcript_unavailable() {
        let err = fetcher(FixedProvider(|| {
            Err(PortError::NotFound("Transcripts are disabled".to_string()))
        }))
        .fetch(&video())
        .await
        .unwrap_err();
        assert_eq!(
            err,
            SummarizeError::TranscriptUnavailable {
                video_id: "dQw4w9WgXcQ".to_string(),
                reason: "Transcripts are disabled".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn other_provider_failures_are_provider_errors() {
        let err = fetcher(FixedProvider(|| {
            Err(PortError::Unexpected("HTTP 429 Too Many Requests".to_string()))
        }))
        .fetch(&video())
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test(start_paused = true)]
    async fn hung_provider_times_out_as_provider_error() {
        let err = fetcher(HangingProvider).fetch(&video()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("timed out"));
    }
}
