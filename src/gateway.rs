//! Session Gate - the main public API for fortress-gate.
//!
//! The `SessionGate` evaluates every inbound console request:
//! - Public paths pass without credential inspection
//! - Protected paths require a valid signed session cookie
//! - Rejections answer 401 on API routes and redirect pages to login
//!
//! Evaluation is a pure function of (request, clock, configuration):
//! no session store, no locks, no I/O beyond one HMAC computation.

use crate::clock::{Clock, SystemClock};
use crate::config::{GateConfig, SESSION_COOKIE};
use crate::gate::decision::Decision;
use crate::gate::request::RequestDescriptor;
use crate::gate::routes::{classify, RouteClass};
use crate::token::verify::verify;
use crate::FortressError;
use std::sync::Arc;

/// Authentication gateway for the Fortress console.
///
/// Create one instance at startup and reuse it for all requests; it holds
/// only read-only configuration and is safe to share across threads.
pub struct SessionGate {
    config: GateConfig,
    clock: Arc<dyn Clock>,
}

impl SessionGate {
    /// Create a gate with the given configuration.
    ///
    /// Uses the system clock for time operations.
    ///
    /// # Errors
    /// Returns an error if configuration validation fails. An empty
    /// shared secret is rejected here rather than silently degrading to
    /// a guessable default.
    pub fn new(config: GateConfig) -> Result<Self, FortressError> {
        config.validate()?;
        Ok(Self {
            config,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create a gate with a custom clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    pub fn new_with_clock(config: GateConfig, clock: Arc<dyn Clock>) -> Result<Self, FortressError> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// Evaluate one request and decide: pass, redirect, or reject.
    ///
    /// Every failure kind (missing cookie, malformed, expired, forged)
    /// produces the identical client-visible outcome for the route class,
    /// so no rejection reason leaks to the client.
    pub fn evaluate(&self, request: &RequestDescriptor) -> Decision {
        let class = classify(&request.path, &self.config);

        if class == RouteClass::Public {
            return Decision::Pass;
        }

        match request.cookie(SESSION_COOKIE) {
            Some(token) => {
                let verdict = verify(
                    token,
                    &self.config.secret,
                    self.clock.now_unix(),
                    self.config.max_token_age_secs,
                );
                if verdict.is_valid() {
                    Decision::Pass
                } else {
                    tracing::debug!(path = %request.path, verdict = ?verdict, "session token rejected");
                    self.deny(class, request)
                }
            }
            None => {
                tracing::debug!(path = %request.path, "no session cookie");
                self.deny(class, request)
            }
        }
    }

    /// The rejection for a protected route class.
    fn deny(&self, class: RouteClass, request: &RequestDescriptor) -> Decision {
        match class {
            RouteClass::ProtectedApi => Decision::unauthorized(),
            _ => Decision::Redirect {
                location: format!("{}{}", request.origin(), self.config.login_path),
            },
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}
