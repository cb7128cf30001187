use crate::prelude::FromArg;

/// Read the leading base-10 integer of `value`.
///
/// Leading ascii whitespace and a single sign are accepted, and anything following the digits is ignored.
/// For example, `" -12abc"` reads as `-12`.
/// Out of range values saturate at the `i64` bounds.
/// Returns `None` when no digits lead the value.
pub(crate) fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if end == 0 {
        return None;
    }

    let mut total: i64 = 0;

    for digit in unsigned[..end].bytes().map(|b| i64::from(b - b'0')) {
        total = if negative {
            total.saturating_mul(10).saturating_sub(digit)
        } else {
            total.saturating_mul(10).saturating_add(digit)
        };
    }

    Some(total)
}

impl FromArg for bool {
    /// Presence is true, unless the value leads with an integer equal to `0`.
    fn from_arg(value: &str) -> Self {
        value.is_empty() || leading_integer(value).map_or(true, |n| n != 0)
    }
}

impl FromArg for String {
    fn from_arg(value: &str) -> Self {
        value.to_string()
    }
}

impl FromArg for i64 {
    /// A value without a leading integer reads as `0`.
    fn from_arg(value: &str) -> Self {
        leading_integer(value).unwrap_or(0)
    }
}

impl FromArg for i32 {
    /// Same as `i64`, saturating at the `i32` bounds.
    fn from_arg(value: &str) -> Self {
        let wide = i64::from_arg(value);
        wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some(0))]
    #[case("11", Some(11))]
    #[case("-11", Some(-11))]
    #[case("+11", Some(11))]
    #[case("  7", Some(7))]
    #[case("\t-7", Some(-7))]
    #[case("12abc", Some(12))]
    #[case("007", Some(7))]
    #[case("9223372036854775807", Some(i64::MAX))]
    #[case("9223372036854775808", Some(i64::MAX))]
    #[case("-9223372036854775808", Some(i64::MIN))]
    #[case("-99999999999999999999", Some(i64::MIN))]
    #[case("", None)]
    #[case("-", None)]
    #[case("+", None)]
    #[case("NaN", None)]
    #[case("NotANumber", None)]
    #[case("eleven", None)]
    #[case("- 1", None)]
    #[case("x1", None)]
    fn leading_integer_prefix(#[case] value: &str, #[case] expected: Option<i64>) {
        assert_eq!(leading_integer(value), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("1", true)]
    #[case("2", true)]
    #[case("-1", true)]
    #[case("yes", true)]
    #[case("0", false)]
    #[case("00", false)]
    #[case("0abc", false)]
    fn bool_from_arg(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(bool::from_arg(value), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("11", 11)]
    #[case("NaN", 0)]
    #[case("-3", -3)]
    fn i64_from_arg(#[case] value: &str, #[case] expected: i64) {
        assert_eq!(i64::from_arg(value), expected);
    }

    #[rstest]
    #[case("11", 11)]
    #[case("4294967296", i32::MAX)]
    #[case("-4294967296", i32::MIN)]
    #[case("verbose", 0)]
    fn i32_from_arg(#[case] value: &str, #[case] expected: i32) {
        assert_eq!(i32::from_arg(value), expected);
    }

    #[test]
    fn string_from_arg() {
        assert_eq!(String::from_arg(""), "");
        assert_eq!(String::from_arg("eleven"), "eleven");
    }
}
