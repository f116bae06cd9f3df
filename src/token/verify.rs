//! Token verification pipeline.
//!
//! The flow, in order:
//! 1. Parse the wire form (malformed tokens stop here)
//! 2. Check age against the maximum, boundary inclusive
//! 3. Check the timestamp is not future-dated beyond clock-skew tolerance
//! 4. Recompute the authentication code and compare in constant time

use crate::token::codec::parse;
use crate::token::mac::{code_matches, compute_code};

/// Allowed clock skew for future-dated timestamps (60 seconds).
///
/// An `issued_at` further ahead of `now` than this is treated as expired.
/// Without the bound a token minted far in the future would stay valid
/// until its timestamp aged past the maximum, i.e. indefinitely.
pub const MAX_FUTURE_TOLERANCE_SECS: i64 = 60;

/// Outcome of verifying a session token.
///
/// Every non-`Valid` verdict must be presented identically to the client;
/// the distinction exists for internal logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Token parses, is within age bounds, and carries the correct code.
    Valid,
    /// Token does not parse into `"{issued_at}.{code}"`.
    Malformed,
    /// Token is older than the maximum age, or future-dated beyond skew.
    Expired,
    /// Authentication code does not match the recomputed one.
    Forged,
}

impl Verdict {
    /// Whether the verdict grants access.
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

/// Verify a session token against the shared secret and the clock.
///
/// # Arguments
/// * `token_text` - Cookie value in wire form
/// * `secret` - Shared HMAC secret
/// * `now` - Current Unix time in seconds
/// * `max_age_secs` - Maximum accepted `now - issued_at`, inclusive
pub fn verify(token_text: &str, secret: &str, now: i64, max_age_secs: i64) -> Verdict {
    let Some(parsed) = parse(token_text) else {
        return Verdict::Malformed;
    };

    let age_secs = now - parsed.issued_at;
    if age_secs > max_age_secs {
        return Verdict::Expired;
    }
    if age_secs < -MAX_FUTURE_TOLERANCE_SECS {
        return Verdict::Expired;
    }

    let computed = compute_code(parsed.issued_at, secret);
    if !code_matches(&parsed.code, &computed) {
        return Verdict::Forged;
    }

    Verdict::Valid
}
