//! Session token wire form.
//!
//! A token is `"{issued_at}.{authentication_code}"`: a decimal Unix
//! timestamp, one separator, and a lowercase hex authentication code.

/// Separator between the timestamp and the authentication code.
pub const SEPARATOR: char = '.';

/// A token split into its two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    /// Issuance time, Unix seconds.
    pub issued_at: i64,
    /// Supplied authentication code (hex, as received).
    pub code: String,
}

/// Parse a token from its wire form.
///
/// Returns `None` if the part count is not exactly two, either part is
/// empty, or the first part is not a base-10 non-negative integer that
/// fits in 63 bits. Never panics on any input.
pub fn parse(token_text: &str) -> Option<ParsedToken> {
    let parts: Vec<&str> = token_text.split(SEPARATOR).collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }

    // u64 parse rejects signs and non-digits; the try_into guards the
    // handful of values above i64::MAX.
    let issued_at: i64 = parts[0].parse::<u64>().ok()?.try_into().ok()?;

    Some(ParsedToken {
        issued_at,
        code: parts[1].to_string(),
    })
}

/// Render a token in wire form.
///
/// Issuers and tests use this; verification goes through [`parse`].
pub fn encode(issued_at: i64, code: &str) -> String {
    format!("{}{}{}", issued_at, SEPARATOR, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let parsed = parse("1700000000.deadbeef").unwrap();
        assert_eq!(parsed.issued_at, 1_700_000_000);
        assert_eq!(parsed.code, "deadbeef");
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_parse_no_separator() {
        assert_eq!(parse("1700000000deadbeef"), None);
    }

    #[test]
    fn test_parse_two_separators() {
        assert_eq!(parse("1700000000.dead.beef"), None);
    }

    #[test]
    fn test_parse_empty_timestamp() {
        assert_eq!(parse(".deadbeef"), None);
    }

    #[test]
    fn test_parse_empty_code() {
        assert_eq!(parse("1700000000."), None);
    }

    #[test]
    fn test_parse_non_numeric_timestamp() {
        assert_eq!(parse("yesterday.deadbeef"), None);
    }

    #[test]
    fn test_parse_negative_timestamp() {
        assert_eq!(parse("-5.deadbeef"), None);
    }

    #[test]
    fn test_parse_timestamp_overflow() {
        // One past i64::MAX
        assert_eq!(parse("9223372036854775808.deadbeef"), None);
    }

    #[test]
    fn test_encode_round_trip() {
        let wire = encode(1_700_000_000, "deadbeef");
        assert_eq!(wire, "1700000000.deadbeef");
        assert_eq!(
            parse(&wire),
            Some(ParsedToken {
                issued_at: 1_700_000_000,
                code: "deadbeef".to_string()
            })
        );
    }
}
