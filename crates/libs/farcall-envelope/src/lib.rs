//! # farcall-envelope
//!
//! Typed value envelopes for type-erased call boundaries.
//!
//! A remote invocation can only carry values the transport understands.
//! Anything richer (optionals, collections, plain structs) is wrapped into a
//! [`TypedEnvelope`]: the codec output plus the canonical name of the type it
//! was encoded from. The receiving side names the type it expects, and the
//! envelope refuses to decode when the names differ.
//!
//! ## Wire Shape
//!
//! ```text
//! { "type": <string>, "data": <bytes> }
//! ```
//!
//! Both fields are mandatory; field order does not matter.
//!
//! ## Example
//!
//! ```rust
//! use farcall_envelope::{EnvelopeError, TypedEnvelope};
//!
//! let envelope = TypedEnvelope::wrap(&vec![1_i64, 2, 3]).unwrap();
//! assert_eq!(envelope.type_tag().as_str(), "List<Int>");
//!
//! let values: Vec<i64> = envelope.unwrap().unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! let err = envelope.unwrap::<Vec<String>>().unwrap_err();
//! assert!(matches!(err, EnvelopeError::TypeMismatch { .. }));
//! ```
//!
//! ## Crate Family
//!
//! - **`farcall-envelope`** (this crate): typed value envelopes
//! - [`farcall-ipc`](https://crates.io/crates/farcall-ipc): remote type resolution
//! - [`farcall`](https://crates.io/crates/farcall): meta-crate re-exporting all

pub mod codec;
pub mod envelope;
pub mod error;
pub mod identity;

pub use codec::{CodecError, JsonCodec, MsgpackCodec, ValueCodec};
pub use envelope::{IntoEnvelope, TypedEnvelope};
pub use error::EnvelopeError;
pub use identity::{CanonicalNames, IdentityProvider, Named, QualifiedNames, TypeIdentity};
