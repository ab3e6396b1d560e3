//! services/api/src/adapters/summary_llm.rs
//!
//! This module contains the adapter for the summarizing LLM.
//! It implements the `CompletionProvider` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use video_summarizer_core::ports::{CompletionProvider, PortError, PortResult};

const SYSTEM_INSTRUCTIONS: &str = "You are a summarization assistant. You receive the transcript of a video \
and write a clear, faithful summary of it in plain prose. Do not invent details that are not in the transcript.";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CompletionProvider` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiSummaryAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiSummaryAdapter {
    /// Creates a new `OpenAiSummaryAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Builds the client for an OpenAI-compatible endpoint.
    ///
    /// Requests are bounded by `timeout` and the library's rate-limit backoff
    /// is turned off, so every completion is a single attempt.
    pub fn build_client(
        api_key: &str,
        api_base: Option<&str>,
        timeout: Duration,
    ) -> Result<Client<OpenAIConfig>, reqwest::Error> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(api_base) = api_base {
            config = config.with_api_base(api_base.trim_end_matches('/'));
        }
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        let single_attempt = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };
        Ok(Client::with_config(config)
            .with_http_client(http_client)
            .with_backoff(single_attempt))
    }
}

/// Maps client errors onto the port taxonomy, keeping the provider's message.
fn map_openai_error(e: OpenAIError) -> PortError {
    match e {
        OpenAIError::Reqwest(e) if e.is_timeout() => {
            PortError::Unexpected(format!("the AI provider did not respond in time: {}", e))
        }
        OpenAIError::ApiError(api) if is_auth_failure(api.code.as_deref(), &api.message) => {
            PortError::Unauthorized
        }
        other => PortError::Unexpected(other.to_string()),
    }
}

fn is_auth_failure(code: Option<&str>, message: &str) -> bool {
    matches!(code, Some("invalid_api_key") | Some("API_KEY_INVALID"))
        || message.contains("Incorrect API key")
        || message.contains("API key not valid")
}

//=========================================================================================
// `CompletionProvider` Trait Implementation
//=========================================================================================

#[async_trait]
impl CompletionProvider for OpenAiSummaryAdapter {
    /// Sends the summarization prompt and returns the first choice's text.
    async fn complete(&self, prompt: &str) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_INSTRUCTIONS)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        // Extract the text content from the first choice in the response.
        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content)
            } else {
                Err(PortError::Unexpected(
                    "Summary LLM response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "Summary LLM returned no choices in its response.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_are_recognised_by_code_or_message() {
        assert!(is_auth_failure(Some("invalid_api_key"), ""));
        assert!(is_auth_failure(None, "API key not valid. Please pass a valid API key."));
        assert!(is_auth_failure(None, "Incorrect API key provided: sk-****"));
        assert!(!is_auth_failure(Some("insufficient_quota"), "You exceeded your current quota"));
    }
}
