//! Token Codec: wire-form parsing and keyed authentication codes.

pub mod codec;
pub mod mac;
pub mod verify;
