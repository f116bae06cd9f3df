//! # Fortress Gate
//!
//! **Stateless signed-session authentication for the Fortress console.**
//!
//! Fortress Gate sits in front of every console page and API route of the
//! Fortress DDoS/WAF console and decides, per request, whether to pass,
//! redirect to login, or reject with 401. There is no session store: the
//! credential is a signed cookie and the decision is a pure function of
//! the request, the clock, and a shared secret.
//!
//! ## Features
//!
//! - **HMAC-SHA256 session tokens** — `"{issued_at}.{code}"`, verified on
//!   every request against the issuer's shared secret
//! - **Constant-time code comparison** — no timing side-channel on the
//!   authentication code
//! - **Uniform rejection** — malformed, expired, forged, and missing
//!   credentials are indistinguishable to the client
//! - **Fail-closed configuration** — an unset secret denies everything
//!   instead of falling back to a default
//!
//! ## Quickstart
//!
//! ```no_run
//! use fortress_gate::{Decision, GateConfig, RequestDescriptor, SessionGate};
//!
//! fn main() -> Result<(), fortress_gate::FortressError> {
//!     let gate = SessionGate::new(GateConfig::from_env()?)?;
//!
//!     let request = RequestDescriptor::new("GET", "https", "console.example.com", "/dashboard")
//!         .with_header("Cookie", "fortress_auth=1700000000.deadbeef");
//!
//!     match gate.evaluate(&request) {
//!         Decision::Pass => { /* hand to the page/API handler */ }
//!         Decision::Redirect { location } => { /* 302 to location */ }
//!         Decision::Reject { status, body } => { /* answer status + body */ }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Threat Model
//!
//! The gate protects against:
//! - **Forged credentials** — wrong code under the shared secret is rejected
//! - **Stale credentials** — tokens older than the maximum age are rejected
//! - **Rejection oracles** — all failure kinds collapse into one outcome
//!
//! It does **not** implement roles, revocation lists, or any of the
//! traffic inspection done by the mitigation engine behind the console.
//!
//! ## Configuration
//!
//! - `FORTRESS_SECRET` — the shared HMAC secret; must match the issuer
//! - Maximum token age defaults to 7 days (604800 seconds)
//!
//! See [`GateConfig`] for full documentation.

#![deny(warnings)]
#![deny(missing_docs)]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Token codec
pub mod token;

// Request gate
pub mod gate;

// Engine client
pub mod client;

// Gateway (main public API)
pub mod gateway;

// Re-exports for public API
pub use client::http::EngineClient;
pub use clock::{Clock, SystemClock};
pub use config::{GateConfig, SESSION_COOKIE};
pub use errors::FortressError;
pub use gate::decision::Decision;
pub use gate::request::RequestDescriptor;
pub use gate::routes::RouteClass;
pub use gateway::SessionGate;
pub use token::verify::Verdict;

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
