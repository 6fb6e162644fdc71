//! Site setting keys.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_.-]{0,63}$").expect("valid regex"));

/// Keys are lowercase, start with a letter and are at most 64 characters
/// of `[a-z0-9_.-]`.
pub fn validate_setting_key(key: &str) -> Result<(), CoreError> {
    if KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid setting key '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_setting_key("hero_title").is_ok());
        assert!(validate_setting_key("contact.email").is_ok());
    }

    #[test]
    fn rejects_odd_keys() {
        assert!(validate_setting_key("").is_err());
        assert!(validate_setting_key("Hero").is_err());
        assert!(validate_setting_key("1st").is_err());
        assert!(validate_setting_key("a b").is_err());
        assert!(validate_setting_key(&"a".repeat(65)).is_err());
    }
}
