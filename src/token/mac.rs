//! Keyed authentication code computation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length of an authentication code in hex characters (SHA-256 digest).
pub const CODE_HEX_LEN: usize = 64;

/// Compute the authentication code for a timestamp.
///
/// HMAC-SHA256 over the decimal text of `issued_at`, keyed by the shared
/// secret, hex-encoded lowercase. The issuer must produce byte-identical
/// output or every token fails verification.
pub fn compute_code(issued_at: i64, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(issued_at.to_string().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compare a supplied code against a computed one in constant time.
///
/// Unequal lengths compare unequal without revealing where they differ.
pub fn code_matches(supplied: &str, computed: &str) -> bool {
    supplied.as_bytes().ct_eq(computed.as_bytes()).into()
}
