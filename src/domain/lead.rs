//! Lead entity and its field validation rules.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Unvalidated form input for a lead, exactly as typed by the user.
///
/// Validation rules:
/// - `name`: at least 2 characters after trimming, at most 256
/// - `email`: valid email address grammar
/// - `message`: 10 to 4096 characters
///
/// All three rules are static and synchronous; nothing here touches the
/// network. A draft that passes [`Validate::validate`] converts into a
/// [`Lead`] via `TryFrom`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LeadDraft {
    #[validate(custom(function = validate_name))]
    #[validate(length(max = 256, message = "Name must be at most 256 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(
        min = 10,
        max = 4096,
        message = "Message must be between 10 and 4096 characters"
    ))]
    pub message: String,
}

impl LeadDraft {
    /// Returns true when the draft holds no user input at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A validated lead, ready for exactly one write to the remote store.
///
/// Has no identity of its own; the store assigns one (a row id) on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<LeadDraft> for Lead {
    type Error = ValidationErrors;

    fn try_from(draft: LeadDraft) -> Result<Self, Self::Error> {
        draft.validate()?;
        Ok(Lead {
            name: draft.name.trim().to_string(),
            email: draft.email,
            message: draft.message,
        })
    }
}

/// Name rule: at least 2 characters once surrounding whitespace is removed.
///
/// A plain `length(min = 2)` would accept `" J "`, so the trim happens here.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        let mut error = ValidationError::new("length");
        error.message = Some("Name must be at least 2 characters".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> LeadDraft {
        LeadDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_draft_converts_to_lead() {
        let lead = Lead::try_from(draft(
            "Jo",
            "jo@example.com",
            "Hello there, I have a question.",
        ))
        .unwrap();

        assert_eq!(lead.name, "Jo");
        assert_eq!(lead.email, "jo@example.com");
        assert_eq!(lead.message, "Hello there, I have a question.");
    }

    #[test]
    fn name_is_trimmed_on_conversion() {
        let lead = Lead::try_from(draft(
            "  Jo  ",
            "jo@example.com",
            "Hello there, I have a question.",
        ))
        .unwrap();

        assert_eq!(lead.name, "Jo");
    }

    #[test]
    fn short_name_is_rejected() {
        let errors = Lead::try_from(draft("J", "jo@example.com", "A long enough message."))
            .unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn whitespace_padded_single_char_name_is_rejected() {
        let errors = Lead::try_from(draft("  J  ", "jo@example.com", "A long enough message."))
            .unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let errors =
            Lead::try_from(draft("Jo", "not-an-email", "A long enough message.")).unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn short_message_is_rejected() {
        let errors = Lead::try_from(draft("Jo", "jo@example.com", "too short")).unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let errors = Lead::try_from(draft("", "nope", "short")).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let errors = Lead::try_from(draft(
            &"x".repeat(257),
            "jo@example.com",
            &"y".repeat(4097),
        ))
        .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn empty_draft_reports_empty() {
        assert!(LeadDraft::default().is_empty());
        assert!(!draft("Jo", "", "").is_empty());
    }
}
