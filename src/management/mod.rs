//! The management TLV layer: id registry and per-id payloads.

pub mod id;
pub mod payload;
