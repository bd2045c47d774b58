//! Email validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::blocklist::EmailBlocklist;

/// Shape an address must have: `local@labels.tld`, whole string.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// The stage that rejected an email value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailRejection {
    #[error("value is missing")]
    Missing,
    #[error("value does not look like an email address")]
    Shape,
    #[error("value contains blocked fragment '{0}'")]
    BlockedFragment(&'static str),
    #[error("value ends with blocked suffix '{0}'")]
    BlockedSuffix(&'static str),
}

/// Check an email value against the built-in blocklists.
pub fn check_email(value: Option<&str>) -> Result<(), EmailRejection> {
    check_email_with(&EmailBlocklist::DEFAULT, value)
}

/// Check an email value: shape, then blocked fragments, then blocked suffixes.
pub fn check_email_with(
    blocklist: &EmailBlocklist,
    value: Option<&str>,
) -> Result<(), EmailRejection> {
    let Some(email) = value else {
        return Err(EmailRejection::Missing);
    };
    if !EMAIL_REGEX.is_match(email) {
        return Err(EmailRejection::Shape);
    }
    if let Some(fragment) = blocklist.find_fragment(email) {
        return Err(EmailRejection::BlockedFragment(fragment));
    }
    if let Some(suffix) = blocklist.find_suffix(email) {
        return Err(EmailRejection::BlockedSuffix(suffix));
    }
    Ok(())
}

/// Returns true when the value is an acceptable email address.
pub fn validate_email(value: Option<&str>) -> bool {
    check_email(value).is_ok()
}
