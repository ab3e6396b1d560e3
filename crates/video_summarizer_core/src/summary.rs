//! crates/video_summarizer_core/src/summary.rs
//!
//! The summary generator: wraps the transcript in a fixed instruction and asks
//! the completion provider for a summary, exactly once.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::{SummaryText, TranscriptText};
use crate::error::SummarizeError;
use crate::ports::{CompletionProvider, PortError};

pub const DEFAULT_SUMMARY_TIMEOUT: Duration = Duration::from_secs(60);

const SUMMARY_INSTRUCTIONS: &str = "Please provide a concise summary of the following transcript. \
Focus on the main points and key insights. Limit the summary to 3-4 paragraphs:";

/// Builds the single prompt sent for a transcript.
pub fn build_prompt(transcript: &TranscriptText) -> String {
    format!("{SUMMARY_INSTRUCTIONS}\n\n{}", transcript.as_str())
}

#[derive(Clone)]
pub struct SummaryGenerator {
    provider: Arc<dyn CompletionProvider>,
    timeout: Duration,
}

impl SummaryGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Summarizes the transcript. Blank input never reaches the provider.
    pub async fn generate(&self, text: &TranscriptText) -> Result<SummaryText, SummarizeError> {
        if text.is_blank() {
            return Err(SummarizeError::EmptyInput);
        }

        let prompt = build_prompt(text);
        debug!(prompt_chars = prompt.len(), "Requesting summary");

        let completion = match tokio::time::timeout(self.timeout, self.provider.complete(&prompt)).await {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => return Err(SummarizeError::Summarization(e.to_string())),
            Err(_) => {
                return Err(SummarizeError::Summarization(
                    PortError::Timeout(self.timeout).to_string(),
                ))
            }
        };

        let summary = SummaryText::new(completion);
        if summary.as_str().is_empty() {
            return Err(SummarizeError::Summarization(
                "the model returned an empty summary".to_string(),
            ));
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ports::PortResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl CompletionProvider for RecordingProvider {
        async fn complete(&self, prompt: &str) -> PortResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(&self, _prompt: &str) -> PortResult<String> {
            Err(PortError::Unauthorized)
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl CompletionProvider for HangingProvider {
        async fn complete(&self, _prompt: &str) -> PortResult<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn blank_text_fails_without_calling_the_provider() {
        let provider = Arc::new(RecordingProvider {
            reply: "unused".to_string(),
            ..Default::default()
        });
        let generator = SummaryGenerator::new(provider.clone(), DEFAULT_SUMMARY_TIMEOUT);

        for blank in ["", " ", "\n\t  \n"] {
            let err = generator.generate(&TranscriptText::new(blank)).await.unwrap_err();
            assert_eq!(err, SummarizeError::EmptyInput);
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sends_one_prompt_with_instructions_and_transcript() {
        let provider = Arc::new(RecordingProvider {
            reply: "  The video explains things.\n".to_string(),
            ..Default::default()
        });
        let generator = SummaryGenerator::new(provider.clone(), DEFAULT_SUMMARY_TIMEOUT);

        let summary = generator
            .generate(&TranscriptText::new("never gonna give you up"))
            .await
            .unwrap();

        assert_eq!(summary.as_str(), "The video explains things.");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("Please provide a concise summary"));
        assert!(prompts[0].contains("3-4 paragraphs"));
        assert!(prompts[0].ends_with("\n\nnever gonna give you up"));
    }

    #[tokio::test]
    async fn provider_failure_is_summarization_error() {
        let generator = SummaryGenerator::new(Arc::new(FailingProvider), DEFAULT_SUMMARY_TIMEOUT);
        let err = generator.generate(&TranscriptText::new("text")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SummarizationError);
    }

    #[tokio::test]
    async fn blank_completion_is_summarization_error() {
        let provider = Arc::new(RecordingProvider {
            reply: "   ".to_string(),
            ..Default::default()
        });
        let generator = SummaryGenerator::new(provider, DEFAULT_SUMMARY_TIMEOUT);
        let err = generator.generate(&TranscriptText::new("text")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SummarizationError);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_provider_times_out_as_summarization_error() {
        let generator = SummaryGenerator::new(Arc::new(HangingProvider), Duration::from_secs(2));
        let err = generator.generate(&TranscriptText::new("text")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SummarizationError);
        assert!(err.to_string().contains("timed out after 2s"));
    }
}
