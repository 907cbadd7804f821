//! Generation engine — bounded corrective-retry loop around the LLM.
//!
//! Two failure classes are kept apart:
//! - infrastructure failures (auth, network) abort immediately and are never
//!   retried — retrying an auth failure cannot succeed;
//! - content-policy failures are retried with a corrective block listing the
//!   previous attempt's reasons, up to the attempt bound.
//!
//! A malformed response (missing `SUBJECT:`/`BODY:` markers) is neither: it
//! folds into a safe fallback email on the same attempt and does not consume
//! a retry.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, error, info, warn};

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::types::GeneratedEmail;
use crate::pipeline::validator::EmailValidator;

/// Subject used when the response cannot be parsed.
const FALLBACK_SUBJECT: &str = "A Property You Might Love";

/// Body used when the response is empty as well as unparseable.
const FALLBACK_BODY: &str = "I found a property that might interest you. Please let me know \
if you would like more details.";

/// Sampling temperature for email generation.
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Token budget for one generated email.
const GENERATION_MAX_TOKENS: u32 = 1024;

/// Drives LLM generation with validation and corrective retry.
pub struct GenerationEngine {
    llm: Arc<dyn LlmProvider>,
    validator: EmailValidator,
    max_attempts: u32,
    subject_pattern: Regex,
    body_pattern: Regex,
}

impl GenerationEngine {
    pub fn new(llm: Arc<dyn LlmProvider>, validator: EmailValidator, max_attempts: u32) -> Self {
        Self {
            llm,
            validator,
            max_attempts,
            subject_pattern: Regex::new(r"(?i)SUBJECT:[ \t]*(.+?)[ \t]*(?:BODY:|\n|$)").unwrap(),
            body_pattern: Regex::new(r"(?is)BODY:\s*(.+)$").unwrap(),
        }
    }

    /// Generate a validated email from the assembled base prompt.
    ///
    /// Attempt 1 uses the base prompt; later attempts append a corrective
    /// block with the previous attempt's validation failures. Terminates
    /// with the first valid email, or `RetriesExhausted` carrying the last
    /// reason list.
    pub async fn generate(&self, base_prompt: &str) -> Result<GeneratedEmail, PipelineError> {
        let mut last_reasons: Vec<String> = Vec::new();

        for attempt in 1..=self.max_attempts {
            let prompt = if last_reasons.is_empty() {
                base_prompt.to_string()
            } else {
                corrective_prompt(base_prompt, &last_reasons)
            };

            debug!(attempt, model = self.llm.model_name(), "Invoking LLM");

            let request = CompletionRequest::new(vec![ChatMessage::user(prompt)])
                .with_temperature(GENERATION_TEMPERATURE)
                .with_max_tokens(GENERATION_MAX_TOKENS);

            let response = match self.llm.complete(request).await {
                Ok(response) => response,
                Err(e) => {
                    if e.is_auth_failure() {
                        error!(
                            error = %e,
                            "LLM credential failure - check the provider API key and account \
                             status; this error is not retried"
                        );
                    } else {
                        error!(error = %e, attempt, "LLM invocation failed");
                    }
                    return Err(e.into());
                }
            };

            let email = self.parse_response(&response.content);

            match self.validator.validate(&email) {
                Ok(()) => {
                    info!(attempt, "Generated email passed validation");
                    return Ok(email);
                }
                Err(reasons) => {
                    warn!(
                        attempt,
                        reasons = reasons.join("; "),
                        "Generated email failed validation"
                    );
                    last_reasons = reasons;
                }
            }
        }

        Err(PipelineError::RetriesExhausted {
            attempts: self.max_attempts,
            reasons: last_reasons,
        })
    }

    /// Extract `{subject, body}` from the raw response.
    ///
    /// If either marker is missing or either captured field trims to empty,
    /// a synthesized fallback email is returned instead — parse problems are
    /// swallowed into a safe default, not bounced through the retry loop.
    fn parse_response(&self, raw: &str) -> GeneratedEmail {
        let fallback = GeneratedEmail {
            subject: FALLBACK_SUBJECT.to_string(),
            body: if raw.trim().is_empty() {
                FALLBACK_BODY.to_string()
            } else {
                raw.trim().to_string()
            },
        };

        let (Some(subject_caps), Some(body_caps)) = (
            self.subject_pattern.captures(raw),
            self.body_pattern.captures(raw),
        ) else {
            warn!("Could not parse email response format, using fallback");
            return fallback;
        };

        let subject = subject_caps[1].trim();
        let body = body_caps[1].trim();

        if subject.is_empty() || body.is_empty() {
            warn!("Parsed empty subject or body, using fallback");
            return fallback;
        }

        GeneratedEmail {
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }
}

/// Base prompt plus a corrective block enumerating the previous attempt's
/// failures, instructing the model to fix exactly those issues.
fn corrective_prompt(base_prompt: &str, reasons: &[String]) -> String {
    let mut prompt = String::with_capacity(base_prompt.len() + 256);
    prompt.push_str(base_prompt);
    prompt.push_str(
        "\n\nIMPORTANT: Your previous attempt failed validation for the following reasons:\n",
    );
    for reason in reasons {
        prompt.push_str("- ");
        prompt.push_str(reason);
        prompt.push('\n');
    }
    prompt.push_str(
        "Rewrite the email fixing exactly these issues while keeping the same output format.",
    );
    prompt
}
