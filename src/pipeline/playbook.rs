//! Static realtor guidance injected into the prompt.
//!
//! `GuidanceProvider` is the seam for a future retrieval-backed context
//! source; today the only implementation returns the fixed pitch playbook.

use async_trait::async_trait;

/// Source of persona/technique guidance text for the prompt.
#[async_trait]
pub trait GuidanceProvider: Send + Sync {
    /// Retrieve guidance text relevant to this generation.
    async fn guidance(&self) -> String;
}

/// The static realtor pitch playbook.
pub struct StaticPlaybook;

#[async_trait]
impl GuidanceProvider for StaticPlaybook {
    async fn guidance(&self) -> String {
        PLAYBOOK.trim().to_string()
    }
}

const PLAYBOOK: &str = r#"
REALTOR PITCH PLAYBOOK

1. OPENING HOOKS
- Start with a personalized greeting that shows you've done your homework
- Reference something specific about the client's preferences or lifestyle
- Keep it warm but professional

2. PROPERTY PRESENTATION
- Lead with the most compelling feature for THIS specific client
- Paint a picture of how the property fits their lifestyle
- Use sensory language (imagine, picture, feel)
- Highlight 2-3 key features that match their stated preferences

3. NEIGHBORHOOD CONTEXT
- Connect neighborhood amenities to their lifestyle notes
- Mention proximity to things they care about
- Create a sense of belonging and community

4. WEATHER-AWARE SELLING (when applicable)
- On nice days: "Perfect weather to tour the property and enjoy the outdoor spaces"
- On cold/rainy days: "Cozy up in the home's [warm feature]"
- Use weather to create urgency or comfort as appropriate

5. CALL TO ACTION
- Always include a clear next step
- Offer flexibility (call, text, email)
- Create gentle urgency without pressure

6. TONE MATCHING
- Formal clients: Professional language, complete sentences, proper structure
- Casual clients: Friendly, conversational, contractions okay
- Enthusiastic clients: Exclamation points, energy, emotional language

7. LENGTH GUIDELINES
- Keep emails under 300 words
- Short paragraphs (2-3 sentences max)
- Easy to scan on mobile devices
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn playbook_covers_core_sections() {
        let text = StaticPlaybook.guidance().await;
        assert!(text.starts_with("REALTOR PITCH PLAYBOOK"));
        assert!(text.contains("OPENING HOOKS"));
        assert!(text.contains("CALL TO ACTION"));
        assert!(text.contains("TONE MATCHING"));
    }
}
