//! Fortress gate error types.

use thiserror::Error;

/// Errors that can occur while configuring or operating the gateway.
///
/// A rejected request is *not* an error: verification verdicts and gate
/// decisions are ordinary values. Errors here mean the gateway itself
/// cannot do its job (bad configuration, upstream transport failures),
/// not that a client presented a bad credential.
#[derive(Debug, Error)]
pub enum FortressError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The shared secret is unset or empty (fail-closed).
    #[error("Shared secret is not configured; refusing to authenticate")]
    SecretMissing,

    /// HTTP transport error communicating with the mitigation engine.
    #[error("Engine transport error: {0}")]
    EngineTransport(String),

    /// The mitigation engine returned a non-success status.
    #[error("Engine responded {status} {status_text}")]
    UpstreamStatus {
        /// HTTP status code of the response.
        status: u16,
        /// Reason phrase or response text accompanying the status.
        status_text: String,
    },

    /// Failed to parse a response from the mitigation engine.
    #[error("Protocol error: {0}")]
    ProtocolError(String),
}
