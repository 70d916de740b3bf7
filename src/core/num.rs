// src/core/num.rs
//
// The site renders numbers with space grouping ("125 919"); decimals use a
// comma ("1,85"). Malformed text parses to zero so a broken cell never aborts
// the record it sits in.

/// Strip every non-digit character and parse the remainder. `0` on empty or
/// unparseable input.
pub fn parse_integer(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Comma-grouped rendering, the inverse of [`parse_integer`].
pub fn format_integer(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a ratio like "1,85" or "1.85". `0.0` on garbage.
pub fn parse_decimal(text: &str) -> f64 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_tolerates_garbage() {
        assert_eq!(parse_integer(""), 0);
        assert_eq!(parse_integer("abc"), 0);
        assert_eq!(parse_integer("12 345"), 12_345);
        assert_eq!(parse_integer("1,234,567"), 1_234_567);
        assert_eq!(parse_integer(" 42nd "), 42);
    }

    #[test]
    fn format_groups_by_thousands() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(999), "999");
        assert_eq!(format_integer(1_000), "1,000");
        assert_eq!(format_integer(1_234_567), "1,234,567");
    }

    #[test]
    fn round_trip() {
        for n in [0u64, 9, 10, 999, 1_000, 12_345, 1_600_000, 987_654_321] {
            assert_eq!(parse_integer(&format_integer(n)), n);
        }
    }

    #[test]
    fn parse_decimal_comma_or_dot() {
        assert_eq!(parse_decimal("1,85"), 1.85);
        assert_eq!(parse_decimal("2.5"), 2.5);
        assert_eq!(parse_decimal("n/a"), 0.0);
    }
}
