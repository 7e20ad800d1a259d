//! Remote type resolution for the farcall object-proxy runtime.
//!
//! Given a local type identity and the address of another process, the
//! [`RemoteTypeResolver`] asks that process for its counterpart type and
//! returns a [`RemoteTypeHandle`] usable to route further calls, or `None`
//! when the remote side has no such type. This crate provides:
//!
//! - **Boundary types**: [`HostPort`], [`TypeLookupRequest`],
//!   [`LookupResponse`], [`RemoteTypeHandle`], [`CallingConvention`]
//! - **Async trait definitions**: [`InvocationChannel`] for the transport,
//!   [`DiagnosticSink`] for advisory warnings
//! - **Channels**: [`StubChannel`] (always unavailable), [`LoopbackChannel`]
//!   over in-process [`TypeRegistry`] instances, and [`TimeoutChannel`]
//! - **[`ChannelError`]** surfaced verbatim from the channel
//! - **[`FarcallConfig`]** loaded from TOML
//!
//! # Lookup outcomes
//!
//! - `Ok(None)`: the remote process does not know the type. Not an error.
//! - `Ok(Some(handle))`: found. Dynamically defined types additionally
//!   produce one [`Diagnostic`] before the handle is returned.
//! - `Err(ChannelError)`: the channel failed. Never retried here.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod timeout;
pub mod traits;
pub mod types;

pub use config::{AnyCodec, AnyNames, CodecKind, FarcallConfig, NamingScheme};
pub use diagnostics::{Diagnostic, DiagnosticKind, LogSink};
pub use error::{ChannelError, ConfigError};
pub use registry::{LoopbackChannel, TypeRegistry};
pub use resolver::RemoteTypeResolver;
pub use timeout::TimeoutChannel;
pub use traits::{DiagnosticSink, InvocationChannel};
pub use types::*;

mod stub;
pub use stub::StubChannel;
