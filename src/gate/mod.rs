//! Request Gate: classification and the per-request authentication decision.

pub mod decision;
pub mod request;
pub mod routes;
