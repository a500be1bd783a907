//! Input format validators used as guards by forms.

use regex::Regex;

/// Check that a string looks like a `local@domain` email address.
///
/// A single `@`, non-empty local and domain segments, and a dotted domain
/// are required; anything stricter is the remote service's business.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("Invalid regex");
    re.is_match(value.trim())
}

/// Check that a string looks like a web URL.
///
/// The scheme is optional; a dotted host is required.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    let re = Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("Invalid regex");
    re.is_match(value.trim())
}
