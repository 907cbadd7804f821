//! Bridges rig-core's `CompletionModel` to our `LlmProvider` trait.

use async_trait::async_trait;
use rig::completion::{AssistantContent, CompletionModel, Message};

use crate::error::LlmError;
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider, Role};

/// Adapter wrapping a rig completion model.
pub struct RigAdapter<M: CompletionModel> {
    model: M,
    model_name: String,
    provider_name: String,
}

impl<M: CompletionModel> RigAdapter<M> {
    pub fn new(model: M, model_name: &str, provider_name: &str) -> Self {
        Self {
            model,
            model_name: model_name.to_string(),
            provider_name: provider_name.to_string(),
        }
    }

    /// Classify a rig error by message. rig surfaces provider HTTP failures
    /// as strings, so credential failures are detected by content.
    fn map_error(&self, reason: String) -> LlmError {
        let lower = reason.to_lowercase();
        let auth_markers = [
            "401",
            "403",
            "authentication",
            "unauthorized",
            "invalid x-api-key",
            "api key",
            "credential",
        ];
        if auth_markers.iter().any(|m| lower.contains(m)) {
            LlmError::AuthFailed {
                provider: self.provider_name.clone(),
                reason,
            }
        } else {
            LlmError::RequestFailed {
                provider: self.provider_name.clone(),
                reason,
            }
        }
    }
}

#[async_trait]
impl<M: CompletionModel> LlmProvider for RigAdapter<M> {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        // Fold system messages into the preamble; user messages into the prompt.
        let mut preamble = String::new();
        let mut prompt = String::new();
        for message in &request.messages {
            let target = match message.role {
                Role::System => &mut preamble,
                Role::User => &mut prompt,
            };
            if !target.is_empty() {
                target.push_str("\n\n");
            }
            target.push_str(&message.content);
        }

        let mut builder = self.model.completion_request(Message::user(prompt));
        if !preamble.is_empty() {
            builder = builder.preamble(preamble);
        }
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(temperature as f64);
        }
        if let Some(max_tokens) = request.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = self
            .model
            .completion(builder.build())
            .await
            .map_err(|e| self.map_error(e.to_string()))?;

        // Concatenate text blocks in order; ignore non-text content.
        let mut content = String::new();
        for part in response.choice {
            if let AssistantContent::Text(text) = part {
                content.push_str(&text.text);
            }
        }

        Ok(CompletionResponse {
            content,
            input_tokens: response.usage.input_tokens as u32,
            output_tokens: response.usage.output_tokens as u32,
        })
    }
}
