//! Post-processing — hard word-count ceiling on the generated body.

use tracing::debug;

use crate::pipeline::types::GeneratedEmail;

/// Words kept when truncating, leaving room for the ellipsis marker.
const TRUNCATE_KEEP_WORDS: usize = 297;

/// Enforce the word ceiling by truncation.
///
/// Bodies at or under `max_words` pass through unchanged; longer bodies keep
/// the first 297 words plus an ellipsis. Idempotent — a truncated body is
/// itself under the ceiling.
pub fn enforce_word_limit(email: GeneratedEmail, max_words: usize) -> GeneratedEmail {
    let words: Vec<&str> = email.body.split_whitespace().collect();

    if words.len() <= max_words {
        return email;
    }

    debug!(
        word_count = words.len(),
        max_words, "Truncating generated body to word ceiling"
    );

    let keep = TRUNCATE_KEEP_WORDS.min(max_words);
    let truncated = format!("{}...", words[..keep].join(" "));

    GeneratedEmail {
        subject: email.subject,
        body: truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_with_words(count: usize) -> GeneratedEmail {
        GeneratedEmail {
            subject: "Subject".into(),
            body: vec!["word"; count].join(" "),
        }
    }

    #[test]
    fn compliant_body_unchanged() {
        let email = email_with_words(300);
        let result = enforce_word_limit(email.clone(), 300);
        assert_eq!(result, email);
    }

    #[test]
    fn over_limit_body_truncated_with_ellipsis() {
        let result = enforce_word_limit(email_with_words(450), 300);
        assert_eq!(result.body.split_whitespace().count(), 297);
        assert!(result.body.ends_with("word..."));
        assert_eq!(result.subject, "Subject");
    }

    #[test]
    fn idempotent_on_truncated_output() {
        let once = enforce_word_limit(email_with_words(450), 300);
        let twice = enforce_word_limit(once.clone(), 300);
        assert_eq!(once, twice);
    }

    #[test]
    fn whitespace_runs_count_as_single_separator() {
        let email = GeneratedEmail {
            subject: "Subject".into(),
            body: "one   two\n\nthree\tfour".into(),
        };
        let result = enforce_word_limit(email.clone(), 4);
        assert_eq!(result, email);
    }
}
