//! Integer parsing for form inputs.
//!
//! Number inputs in the Mini-App arrive as free text. Parsing is lenient in
//! the way web forms usually are: leading whitespace and a sign are accepted,
//! then as many digits as are present; anything after the digits is ignored.

/// Parses the leading integer of `input`.
///
/// Returns `None` when no digits are present or the value does not fit in
/// an `i32`.
///
/// # Examples
///
/// ```
/// use skirmish_domain::parse_int;
///
/// assert_eq!(parse_int(" 12"), Some(12));
/// assert_eq!(parse_int("-3 hp"), Some(-3));
/// assert_eq!(parse_int("4.5"), Some(4));
/// assert_eq!(parse_int("abc"), None);
/// assert_eq!(parse_int(""), None);
/// ```
pub fn parse_int(input: &str) -> Option<i32> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parses the leading integer of `input`, falling back to `0`.
pub fn parse_int_or_zero(input: &str) -> i32 {
    parse_int(input).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_numbers() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("  17"), Some(17));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("3d6"), Some(3));
        assert_eq!(parse_int("1e3"), Some(1));
    }

    #[test]
    fn rejects_inputs_without_leading_digits() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("x12"), None);
        assert_eq!(parse_int("- 5"), None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(parse_int("99999999999"), None);
        assert_eq!(parse_int("99999999999999999999999"), None);
        assert_eq!(parse_int("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn or_zero_falls_back() {
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("oops"), 0);
        assert_eq!(parse_int_or_zero("-2"), -2);
    }
}
