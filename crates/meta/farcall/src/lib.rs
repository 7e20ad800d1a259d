//! # farcall
//!
//! Meta-crate re-exporting all farcall library crates for convenient
//! dependency declaration.
//!
//! Instead of depending on each crate individually:
//!
//! ```toml
//! [dependencies]
//! farcall-envelope = "0.1"
//! farcall-ipc = "0.1"
//! ```
//!
//! You can depend on the meta-crate:
//!
//! ```toml
//! [dependencies]
//! farcall = "0.1"
//! ```
//!
//! ## Crate Family
//!
//! - [`farcall-envelope`](https://crates.io/crates/farcall-envelope): Typed value envelopes
//! - [`farcall-ipc`](https://crates.io/crates/farcall-ipc): Remote type resolution

/// Typed value envelopes, type identities and payload codecs.
pub use farcall_envelope as envelope;

/// Remote type lookup, invocation channels and configuration.
pub use farcall_ipc as ipc;
