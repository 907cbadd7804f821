//! Pipeline orchestrator — fixed-order stages from records to email.
//!
//! Flow:
//! 1. Input validation + normalization (no I/O)
//! 2. Weather fetch (degraded on failure unless policy requires it)
//! 3. Guidance retrieval
//! 4. Prompt assembly
//! 5. Generation (bounded corrective-retry loop)
//! 6. Post-processing (word ceiling)
//!
//! Each stage output is a distinct type, so a stage can only read fields an
//! earlier stage produced — the single-writer-per-field invariant holds by
//! construction. Runs share no state; concurrent runs are independent.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{PipelineConfig, WeatherPolicy};
use crate::error::PipelineError;
use crate::llm::LlmProvider;
use crate::pipeline::generator::GenerationEngine;
use crate::pipeline::playbook::GuidanceProvider;
use crate::pipeline::postprocess::enforce_word_limit;
use crate::pipeline::prompt::assemble_prompt;
use crate::pipeline::types::{
    ClientRecord, EmailRequest, GeneratedEmail, PropertyRecord, WeatherSummary,
};
use crate::pipeline::validator::{EmailValidator, ValidationPolicy};
use crate::weather::WeatherProvider;

/// Stage 1 output: validated records and trimmed notes.
#[derive(Debug)]
struct NormalizedInput {
    client: ClientRecord,
    property: PropertyRecord,
    notes: String,
}

/// Stages 2–3 output: normalized input plus gathered context signals.
struct GatheredContext {
    input: NormalizedInput,
    weather: Option<WeatherSummary>,
    guidance: String,
}

/// The email generation pipeline.
///
/// Created once and shared; each `run` is an independent linear sequence of
/// stages with no cross-request state.
pub struct Pipeline {
    engine: GenerationEngine,
    weather: Arc<dyn WeatherProvider>,
    guidance: Arc<dyn GuidanceProvider>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        weather: Arc<dyn WeatherProvider>,
        guidance: Arc<dyn GuidanceProvider>,
        config: PipelineConfig,
    ) -> Self {
        let policy = ValidationPolicy::strict()
            .with_required_temperature(config.weather_policy == WeatherPolicy::Required);
        let engine = GenerationEngine::new(llm, EmailValidator::new(policy), config.max_attempts);

        Self {
            engine,
            weather,
            guidance,
            config,
        }
    }

    /// Run the full pipeline once.
    ///
    /// Returns the validated, post-processed email, or the first terminal
    /// error. Required-field validation happens before any I/O.
    pub async fn run(&self, request: EmailRequest) -> Result<GeneratedEmail, PipelineError> {
        // Stage 1: validate + normalize (no I/O)
        let input = normalize(request)?;
        info!(
            client = %input.client.name,
            property = %input.property.address,
            "Starting email generation"
        );

        // Stage 2: weather fetch
        let weather = self
            .weather
            .fetch(&input.property.city, &input.property.state)
            .await;
        if weather.is_none() && self.config.weather_policy == WeatherPolicy::Required {
            return Err(PipelineError::WeatherRequired {
                city: input.property.city.clone(),
                state: input.property.state.clone(),
            });
        }
        debug!(weather_available = weather.is_some(), "Weather stage complete");

        // Stage 3: guidance retrieval
        let guidance = self.guidance.guidance().await;

        let context = GatheredContext {
            input,
            weather,
            guidance,
        };

        // Stage 4: prompt assembly (pure)
        let prompt = assemble_prompt(
            &context.input.client,
            &context.input.property,
            &context.guidance,
            context.weather.as_ref(),
            &context.input.notes,
        );
        debug!(prompt_chars = prompt.len(), "Prompt assembled");

        // Stage 5: generation with corrective retry
        let email = self.engine.generate(&prompt).await?;

        // Stage 6: post-processing
        let email = enforce_word_limit(email, self.config.max_words);

        info!(subject = %email.subject, "Email generation complete");
        Ok(email)
    }
}

/// Reject missing records before any I/O; trim realtor notes.
fn normalize(request: EmailRequest) -> Result<NormalizedInput, PipelineError> {
    let client = request
        .client
        .ok_or(PipelineError::MissingInput { field: "client" })?;
    let property = request
        .property
        .ok_or(PipelineError::MissingInput { field: "property" })?;
    let notes = request.notes.unwrap_or_default().trim().to_string();

    Ok(NormalizedInput {
        client,
        property,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::fixtures::{sample_client, sample_property};

    #[test]
    fn normalize_rejects_missing_client() {
        let request = EmailRequest {
            client: None,
            property: Some(sample_property()),
            notes: None,
        };
        let err = normalize(request).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingInput { field: "client" }
        ));
    }

    #[test]
    fn normalize_rejects_missing_property() {
        let request = EmailRequest {
            client: Some(sample_client()),
            property: None,
            notes: None,
        };
        let err = normalize(request).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingInput { field: "property" }
        ));
    }

    #[test]
    fn normalize_trims_notes() {
        let request = EmailRequest {
            client: Some(sample_client()),
            property: Some(sample_property()),
            notes: Some("  mention the pool  \n".into()),
        };
        let input = normalize(request).unwrap();
        assert_eq!(input.notes, "mention the pool");
    }

    #[test]
    fn normalize_defaults_notes_to_empty() {
        let request = EmailRequest {
            client: Some(sample_client()),
            property: Some(sample_property()),
            notes: None,
        };
        assert_eq!(normalize(request).unwrap().notes, "");
    }
}
