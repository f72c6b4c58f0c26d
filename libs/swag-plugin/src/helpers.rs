//! Small merge helpers shared by the filters.

/// Keep `existing` unless it is missing, blank, or replacement is `allowed`.
///
/// ```
/// # use swag_plugin::helpers::check_string;
/// assert_eq!(check_string(Some("Mine"), "Canonical", false), "Mine");
/// assert_eq!(check_string(Some("Mine"), "Canonical", true), "Canonical");
/// assert_eq!(check_string(Some("  "), "Canonical", false), "Canonical");
/// assert_eq!(check_string(None, "Canonical", false), "Canonical");
/// ```
#[must_use]
pub fn check_string(existing: Option<&str>, replacement: &str, allowed: bool) -> String {
    match existing {
        Some(text) if !allowed && !text.trim().is_empty() => text.to_owned(),
        _ => replacement.to_owned(),
    }
}

/// Either of two permission bits.
#[must_use]
pub const fn either(first: bool, second: bool) -> bool {
    first || second
}
