//! String helpers for form text fields.

/// Trims `value` and returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use skirmish_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  Bite "), Some("Bite"));
/// assert_eq!(none_if_blank("   "), None);
/// assert_eq!(none_if_blank(""), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Trims `value`, substituting `fallback` when the result is empty.
///
/// # Examples
///
/// ```
/// use skirmish_domain::common::trimmed;
///
/// assert_eq!(trimmed(" fire ", "physical"), "fire");
/// assert_eq!(trimmed("  ", "physical"), "physical");
/// ```
pub fn trimmed(value: &str, fallback: &str) -> String {
    none_if_blank(value).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_if_blank_keeps_inner_whitespace() {
        assert_eq!(none_if_blank(" Giant Rat "), Some("Giant Rat"));
    }

    #[test]
    fn test_none_if_blank_with_tabs_and_newlines() {
        assert_eq!(none_if_blank("\t\n"), None);
    }

    #[test]
    fn test_trimmed_uses_fallback_only_when_blank() {
        assert_eq!(trimmed("x", "y"), "x");
        assert_eq!(trimmed("", "y"), "y");
    }
}
