//! Fortress gate configuration.

use crate::FortressError;

/// Environment variable holding the shared secret.
pub const SECRET_ENV_VAR: &str = "FORTRESS_SECRET";

/// Default maximum token age: 7 days, in seconds.
pub const DEFAULT_MAX_TOKEN_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Name of the session cookie carrying the signed token.
pub const SESSION_COOKIE: &str = "fortress_auth";

/// Configuration for the authentication gateway.
///
/// The secret must match the one used by the login endpoint that issues
/// tokens, or every verification fails. There is deliberately no built-in
/// fallback secret: an unset secret denies all protected traffic.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Shared HMAC secret, identical on issuer and verifier.
    /// SECURITY: source from deployment configuration, never hard-code.
    pub secret: String,

    /// Maximum accepted token age in seconds (`now - issued_at`).
    pub max_token_age_secs: i64,

    /// Login page path; public, and the redirect target for rejected
    /// browser navigation.
    pub login_path: String,

    /// Prefix of the authentication-issuance API (public).
    pub auth_api_prefix: String,

    /// Prefix of the hosting framework's internal assets (public).
    pub asset_prefix: String,

    /// Prefix under which rejections answer 401 instead of redirecting.
    pub api_prefix: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            max_token_age_secs: DEFAULT_MAX_TOKEN_AGE_SECS,
            login_path: "/login".to_string(),
            auth_api_prefix: "/api/auth/".to_string(),
            asset_prefix: "/_next/".to_string(),
            api_prefix: "/api/".to_string(),
        }
    }
}

impl GateConfig {
    /// Build a configuration with the given secret and spec'd defaults
    /// for everything else.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Build a configuration from the environment.
    ///
    /// Reads the shared secret from `FORTRESS_SECRET`.
    ///
    /// # Errors
    /// Returns `SecretMissing` if the variable is unset or empty. There is
    /// no fallback default secret.
    pub fn from_env() -> Result<Self, FortressError> {
        let secret = std::env::var(SECRET_ENV_VAR).map_err(|_| FortressError::SecretMissing)?;
        if secret.is_empty() {
            return Err(FortressError::SecretMissing);
        }
        Ok(Self::with_secret(secret))
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), FortressError> {
        if self.secret.is_empty() {
            return Err(FortressError::SecretMissing);
        }
        if self.max_token_age_secs < 0 {
            return Err(FortressError::ConfigError(format!(
                "max_token_age_secs must be non-negative, got {}",
                self.max_token_age_secs
            )));
        }
        if !self.login_path.starts_with('/') {
            return Err(FortressError::ConfigError(format!(
                "login_path must be absolute, got {:?}",
                self.login_path
            )));
        }
        for (name, prefix) in [
            ("auth_api_prefix", &self.auth_api_prefix),
            ("asset_prefix", &self.asset_prefix),
            ("api_prefix", &self.api_prefix),
        ] {
            if !prefix.starts_with('/') {
                return Err(FortressError::ConfigError(format!(
                    "{} must be absolute, got {:?}",
                    name, prefix
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_spec() {
        let config = GateConfig::with_secret("s3cret");
        assert_eq!(config.max_token_age_secs, 604_800);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.auth_api_prefix, "/api/auth/");
        assert_eq!(config.asset_prefix, "/_next/");
        assert_eq!(config.api_prefix, "/api/");
    }

    #[test]
    fn test_validate_ok() {
        let config = GateConfig::with_secret("s3cret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_secret_fails_closed() {
        let config = GateConfig::default();
        assert!(matches!(
            config.validate(),
            Err(FortressError::SecretMissing)
        ));
    }

    #[test]
    fn test_validate_negative_max_age() {
        let mut config = GateConfig::with_secret("s3cret");
        config.max_token_age_secs = -1;
        assert!(matches!(
            config.validate(),
            Err(FortressError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_relative_login_path() {
        let mut config = GateConfig::with_secret("s3cret");
        config.login_path = "login".to_string();
        assert!(matches!(
            config.validate(),
            Err(FortressError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_relative_prefix() {
        let mut config = GateConfig::with_secret("s3cret");
        config.api_prefix = "api/".to_string();
        assert!(matches!(
            config.validate(),
            Err(FortressError::ConfigError(_))
        ));
    }
}
