//! Fallback-guarded generative content.
//!
//! Flow: build prompt → bounded generation call → sanitize → parse →
//! validate → Generated; any failure resolves to the static fallback
//! table instead. The provider never surfaces a generation failure to
//! its caller — the only caller-visible error is a malformed topic,
//! raised before any network call.
//!
//! ARCHITECTURAL RULE: nothing in this module knows about HTTP. Route
//! handlers call in; status codes and request/response shapes stay out.

pub mod client;
pub mod defaults;
pub mod fallback;
pub mod prompts;
pub mod provider;
pub mod sanitize;
pub mod schema;
