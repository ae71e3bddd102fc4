// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lenient parsing of numeric form input.
//!
//! Form fields hold whatever the user typed. These helpers read the
//! leading integer out of that text the same way a browser number field
//! would, leaving the choice of fallback to the caller.

/// Parse the leading integer of `raw`, ignoring surrounding whitespace.
///
/// `"12"` and `"12 min"` both yield `Some(12)`; `""`, `"abc"` and `"-"`
/// yield `None`. Values outside the `i64` range are treated as unparsable.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(leading_integer("5"), Some(5));
        assert_eq!(leading_integer("  42 "), Some(42));
        assert_eq!(leading_integer("+7"), Some(7));
        assert_eq!(leading_integer("-3"), Some(-3));
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(leading_integer("12 min"), Some(12));
        assert_eq!(leading_integer("10.5"), Some(10));
    }

    #[test]
    fn test_unparsable_input() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("99999999999999999999999"), None);
    }
}
