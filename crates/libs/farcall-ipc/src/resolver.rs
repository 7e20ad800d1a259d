//! Remote type lookup and calling-convention classification.

use std::sync::Arc;

use farcall_envelope::{CanonicalNames, IdentityProvider, Named, TypeIdentity};

use crate::diagnostics::{Diagnostic, LogSink};
use crate::error::ChannelError;
use crate::traits::{DiagnosticSink, InvocationChannel};
use crate::types::{HostPort, LookupResponse, RemoteTypeHandle, TypeLookupRequest};

/// Resolves local type identities to their counterparts in another process.
///
/// Every call is a single round-trip over the channel. Nothing is cached,
/// retried or bounded in time here; those are channel concerns.
pub struct RemoteTypeResolver<C, P = CanonicalNames> {
    channel: C,
    names: P,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<C: InvocationChannel> RemoteTypeResolver<C> {
    /// A resolver using canonical type names and the [`LogSink`].
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            names: CanonicalNames,
            diagnostics: Arc::new(LogSink),
        }
    }
}

impl<C: InvocationChannel, P: IdentityProvider> RemoteTypeResolver<C, P> {
    /// Name types through `names` in [`resolve_type`](Self::resolve_type).
    pub fn with_identity_provider<Q: IdentityProvider>(self, names: Q) -> RemoteTypeResolver<C, Q> {
        RemoteTypeResolver {
            channel: self.channel,
            names,
            diagnostics: self.diagnostics,
        }
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn identity_provider(&self) -> &P {
        &self.names
    }

    /// Look up `type_name` in the process at `address`.
    ///
    /// Returns `Ok(None)` when the remote process has no such type. A
    /// dynamically defined type is reported to the diagnostic sink before
    /// its handle is returned.
    pub async fn resolve(
        &self,
        type_name: &TypeIdentity,
        address: &HostPort,
    ) -> Result<Option<RemoteTypeHandle>, ChannelError> {
        let request = TypeLookupRequest::new(type_name.clone(), address.clone());
        log::debug!("resolver: looking up '{type_name}' at {address}");

        match self.channel.send_type_lookup(&request).await? {
            LookupResponse::NotFound => {
                log::debug!("resolver: '{type_name}' not found at {address}");
                Ok(None)
            }
            LookupResponse::Found(handle) => Ok(Some(self.classify(handle))),
        }
    }

    /// Look up the remote counterpart of `T`.
    pub async fn resolve_type<T: Named + ?Sized>(
        &self,
        address: &HostPort,
    ) -> Result<Option<RemoteTypeHandle>, ChannelError> {
        let type_name = self.names.identity_of::<T>();
        self.resolve(&type_name, address).await
    }

    fn classify(&self, handle: RemoteTypeHandle) -> RemoteTypeHandle {
        if handle.is_dynamically_defined() {
            self.diagnostics.report(&Diagnostic::dynamic_dispatch(&handle));
        }
        handle
    }
}
