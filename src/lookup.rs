//! Lookup module
//!
//! Talks to the `/doc` and `/dir` endpoints of the lookup server. Requests are
//! fire-and-forget from the UI's point of view: they go to a background worker
//! over a channel and their completions come back over another one.

pub mod client;
pub mod encode;
mod lookup_types;
pub mod worker;

pub use client::LookupClient;
pub use encode::encode_component;
pub use lookup_types::{LookupKind, LookupRequest, LookupResponse, ResponseStatus};
