//! Contact form subjects and field limits.

use validator::ValidationError;

/// Minimum length of a contact message body, in characters.
pub const MIN_BODY_LEN: u64 = 10;

/// Maximum length of a contact message body, in characters.
pub const MAX_BODY_LEN: u64 = 5000;

/// Subjects a visitor can pick on the contact form.
pub const SUBJECTS: &[&str] = &["quote", "drone", "post-production", "partnership", "other"];

/// `validator` custom rule: the subject must be one of [`SUBJECTS`].
pub fn validate_subject(subject: &str) -> Result<(), ValidationError> {
    if SUBJECTS.contains(&subject) {
        Ok(())
    } else {
        let mut err = ValidationError::new("subject");
        err.message = Some(format!("Subject must be one of: {}", SUBJECTS.join(", ")).into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subjects_pass() {
        for subject in SUBJECTS {
            assert!(validate_subject(subject).is_ok());
        }
    }

    #[test]
    fn unknown_subject_carries_message() {
        let err = validate_subject("spam").unwrap_err();
        assert!(err.message.unwrap().contains("quote"));
    }
}
