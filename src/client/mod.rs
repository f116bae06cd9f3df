//! HTTP client for the Fortress mitigation engine.

pub mod http;
