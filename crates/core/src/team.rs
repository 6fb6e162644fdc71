//! Team member type discriminator.

use crate::error::CoreError;

/// In-house crew member.
pub const MEMBER_TYPE_TEAM: &str = "team";

/// External partner studio or freelancer.
pub const MEMBER_TYPE_PARTNER: &str = "partner";

const VALID_MEMBER_TYPES: &[&str] = &[MEMBER_TYPE_TEAM, MEMBER_TYPE_PARTNER];

/// Validate that `member_type` is `"team"` or `"partner"`.
pub fn validate_member_type(member_type: &str) -> Result<(), CoreError> {
    if VALID_MEMBER_TYPES.contains(&member_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid member type '{member_type}'. Must be one of: {VALID_MEMBER_TYPES:?}"
        )))
    }
}
