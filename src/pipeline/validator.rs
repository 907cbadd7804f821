//! Content policy checks for generated emails.
//!
//! Checks run independently and all violations are collected — the full
//! reason list feeds the generation engine's corrective retry prompt.

use regex::Regex;

use crate::pipeline::types::GeneratedEmail;

/// Named validation policy.
///
/// The strict policy (no emoji, at most one enthusiasm marker) is the
/// default; deployments wanting a looser tone build their own.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Minimum body length in characters.
    pub min_body_chars: usize,
    /// Maximum count of enthusiasm markers (exclamation runs, superlatives).
    pub max_enthusiasm_markers: usize,
    /// Require a degree-Fahrenheit figure in the body. Turned on when the
    /// deployment's weather policy is mandatory.
    pub require_temperature: bool,
}

impl ValidationPolicy {
    /// The strict tone policy.
    pub fn strict() -> Self {
        Self {
            min_body_chars: 50,
            max_enthusiasm_markers: 1,
            require_temperature: false,
        }
    }

    pub fn with_required_temperature(mut self, required: bool) -> Self {
        self.require_temperature = required;
        self
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Validates generated emails against a `ValidationPolicy`.
pub struct EmailValidator {
    policy: ValidationPolicy,
    enthusiasm: Regex,
}

impl EmailValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            // Repeated exclamation runs or superlative words.
            enthusiasm: Regex::new(r"(?i)!{2,}|\b(wow|amazing|incredible|fantastic)\b").unwrap(),
        }
    }

    /// Run all checks. `Err` carries one human-readable reason per violation.
    pub fn validate(&self, email: &GeneratedEmail) -> Result<(), Vec<String>> {
        let mut reasons = Vec::new();

        if email.subject.trim().is_empty() {
            reasons.push("Subject is required".to_string());
        }

        if contains_emoji(&email.subject) {
            reasons.push("Subject cannot contain emojis".to_string());
        }

        if email.body.chars().count() < self.policy.min_body_chars {
            reasons.push("Email body too short".to_string());
        }

        if contains_emoji(&email.body) {
            reasons.push("Body cannot contain emojis".to_string());
        }

        let marker_count = self.enthusiasm.find_iter(&email.body).count();
        if marker_count > self.policy.max_enthusiasm_markers {
            reasons.push(
                "Body is too enthusiastic - reduce exclamation marks and superlatives".to_string(),
            );
        }

        if self.policy.require_temperature && !email.body.contains("°F") {
            reasons
                .push("Body must include weather information (temperature in °F)".to_string());
        }

        if reasons.is_empty() { Ok(()) } else { Err(reasons) }
    }
}

/// Emoji detection: anything outside the Basic Multilingual Plane, plus the
/// common BMP symbol/dingbat ranges.
fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        let code = c as u32;
        code > 0xFFFF
            || (0x2600..=0x26FF).contains(&code)
            || (0x2700..=0x27BF).contains(&code)
            || (0x2300..=0x23FF).contains(&code)
            || (0x2B50..=0x2B55).contains(&code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> EmailValidator {
        EmailValidator::new(ValidationPolicy::strict())
    }

    fn email(subject: &str, body: &str) -> GeneratedEmail {
        GeneratedEmail {
            subject: subject.into(),
            body: body.into(),
        }
    }

    const CLEAN_BODY: &str = "Hi Sarah, I found a home on Oak Street that matches the open \
floor plan you asked about. Would you like to schedule a viewing this week?";

    #[test]
    fn clean_email_passes() {
        assert!(validator().validate(&email("A home you may like", CLEAN_BODY)).is_ok());
    }

    #[test]
    fn empty_subject_flagged() {
        let reasons = validator().validate(&email("  ", CLEAN_BODY)).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("Subject is required")));
    }

    #[test]
    fn surrogate_pair_emoji_flagged() {
        let body = format!("{CLEAN_BODY} \u{1F600}");
        let reasons = validator().validate(&email("Hello", &body)).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("emojis")));
    }

    #[test]
    fn dingbat_emoji_flagged() {
        let body = format!("{CLEAN_BODY} \u{2764}");
        let reasons = validator().validate(&email("Hello", &body)).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("emojis")));
    }

    #[test]
    fn short_body_flagged() {
        let reasons = validator().validate(&email("Hello", "Too short.")).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("too short")));
    }

    #[test]
    fn excessive_enthusiasm_flagged() {
        let body = format!("{CLEAN_BODY} This is amazing!!! You will love it.");
        let reasons = validator().validate(&email("Hello", &body)).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("too enthusiastic")));
    }

    #[test]
    fn single_enthusiasm_marker_passes() {
        let body = format!("{CLEAN_BODY} The backyard is amazing.");
        assert!(validator().validate(&email("Hello", &body)).is_ok());
    }

    #[test]
    fn all_violations_collected() {
        let reasons = validator()
            .validate(&email("", "wow!! \u{1F389}"))
            .unwrap_err();
        // Empty subject, short body, emoji body, enthusiasm.
        assert_eq!(reasons.len(), 4);
    }

    #[test]
    fn temperature_required_when_policy_mandates() {
        let strict = EmailValidator::new(
            ValidationPolicy::strict().with_required_temperature(true),
        );
        let reasons = strict.validate(&email("Hello", CLEAN_BODY)).unwrap_err();
        assert!(reasons.iter().any(|r| r.contains("°F")));

        let with_temp = format!("{CLEAN_BODY} It is a sunny 72°F here today.");
        assert!(strict.validate(&email("Hello", &with_temp)).is_ok());
    }
}
