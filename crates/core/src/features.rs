//! Page contexts a feature card can be shown on.

use crate::error::CoreError;

pub const PAGE_HOME: &str = "home";
pub const PAGE_SERVICES: &str = "services";
pub const PAGE_DRONE: &str = "drone";
pub const PAGE_POST_PRODUCTION: &str = "post-production";

pub const VALID_PAGES: &[&str] = &[PAGE_HOME, PAGE_SERVICES, PAGE_DRONE, PAGE_POST_PRODUCTION];

/// Validate that `page` is a known page context.
pub fn validate_page(page: &str) -> Result<(), CoreError> {
    if VALID_PAGES.contains(&page) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid page '{page}'. Must be one of: {}",
            VALID_PAGES.join(", ")
        )))
    }
}
