//! Prompt assembly.
//!
//! Merges the five named slots — client block, property block, guidance,
//! weather line, realtor notes — into one prompt string with a fixed
//! persona section and a task section. The task section's output-format
//! directive (`SUBJECT:` line, `BODY:` block) is a contract the generation
//! engine's parser depends on.

use crate::pipeline::documents::{format_client, format_property};
use crate::pipeline::types::{ClientRecord, PropertyRecord, WeatherSummary};

/// Fallback when the guidance source returns nothing.
const NO_CONTEXT_FALLBACK: &str = "No additional context";

/// Fallback weather line when no summary is available.
const NO_WEATHER_FALLBACK: &str = "Weather information not available";

/// Fallback when the realtor supplied no notes.
const NO_NOTES_FALLBACK: &str = "None provided";

/// Persona instruction for the realtor voice.
const PERSONA: &str = "You are an experienced, successful real estate agent who excels at \
personalized client communication. Your emails are known for being warm, engaging, and highly \
effective at getting clients excited about properties.

Key traits:
- You always personalize based on what you know about the client
- You match your tone to the client's communication style
- You highlight property features that align with the client's specific preferences
- You're concise but compelling
- You never use pushy sales tactics

Your goal is to write an email that makes the client feel understood and excited about the \
property, while encouraging them to take the next step (scheduling a viewing).";

/// Assemble the final prompt for one generation run.
///
/// Output is a pure function of the inputs; retries reuse the same base
/// prompt with a corrective block appended by the generation engine.
pub fn assemble_prompt(
    client: &ClientRecord,
    property: &PropertyRecord,
    guidance: &str,
    weather: Option<&WeatherSummary>,
    notes: &str,
) -> String {
    let client_info = format_client(client);
    let property_info = format_property(property);

    let context = if guidance.is_empty() {
        NO_CONTEXT_FALLBACK
    } else {
        guidance
    };

    let weather_info = match weather {
        Some(summary) => format!("Current conditions: {}", summary.short_summary),
        None => NO_WEATHER_FALLBACK.to_string(),
    };

    let notes_info = if notes.is_empty() {
        NO_NOTES_FALLBACK
    } else {
        notes
    };

    format!(
        "{PERSONA}

Write a personalized email to pitch a property to a client.

CLIENT INFORMATION:
{client_info}

PROPERTY INFORMATION:
{property_info}

REALTOR GUIDELINES:
{context}

CURRENT WEATHER (use to add a personal touch if relevant):
{weather_info}

ADDITIONAL NOTES FROM REALTOR (incorporate if provided):
{notes_info}

INSTRUCTIONS:
1. Match your tone to the client's communication style:
   - \"formal\": Professional language, complete sentences, proper structure
   - \"casual\": Friendly, conversational tone, contractions okay
   - \"enthusiastic\": High energy, excitement, exclamation points welcome

2. Length: Keep the email under 300 words total

3. Structure:
   - Personalized greeting using the client's first name
   - Opening that references something about their preferences
   - 2-3 short paragraphs highlighting property features that match their needs
   - Optional weather tie-in if it adds value
   - Clear call to action with flexible options
   - Professional sign-off

4. Output format (CRITICAL - follow this exactly):
   Start your response with a subject line, then the body:

   SUBJECT: [Your compelling subject line here]

   BODY:
   [Your complete email body here]

Remember: Be helpful, not salesy. Make the client feel like you truly understand their needs."
    )
}
