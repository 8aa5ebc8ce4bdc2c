/// Lenient integer parsing for the points field.
///
/// Skips leading whitespace, accepts an optional sign and takes the leading run of digits.
/// No digits yields 0, negative values clamp to 0 and overflow saturates. Malformed input never
/// blocks a submission.
#[must_use]
pub fn parse_points(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::parse_points;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_points("5"), 5);
        assert_eq!(parse_points("  42"), 42);
        assert_eq!(parse_points("+7"), 7);
    }

    #[test]
    fn non_numeric_falls_back_to_zero() {
        assert_eq!(parse_points("abc"), 0);
        assert_eq!(parse_points(""), 0);
        assert_eq!(parse_points("-"), 0);
    }

    #[test]
    fn takes_leading_digits_only() {
        assert_eq!(parse_points("12abc"), 12);
        assert_eq!(parse_points("3.9"), 3);
    }

    #[test]
    fn negatives_clamp_and_overflow_saturates() {
        assert_eq!(parse_points("-4"), 0);
        assert_eq!(parse_points("99999999999999"), u32::MAX);
    }
}
