//! In-process type registries and the loopback channel that queries them.
//!
//! A [`TypeRegistry`] plays the remote side of a lookup: it holds the types a
//! process exports, keyed by name. [`LoopbackChannel`] routes lookups to the
//! registry registered for the request's address, without leaving the
//! current process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use farcall_envelope::{Named, TypeIdentity};

use crate::error::ChannelError;
use crate::traits::InvocationChannel;
use crate::types::{
    CallingConvention, HostPort, LookupResponse, RemoteRef, RemoteTypeHandle, TypeLookupRequest,
};

#[derive(Clone, Copy, Debug)]
struct Export {
    remote_ref: RemoteRef,
    calling_convention: CallingConvention,
}

/// Types exported by one process, answering lookups by name equality.
#[derive(Debug)]
pub struct TypeRegistry {
    address: HostPort,
    exports: RwLock<HashMap<TypeIdentity, Export>>,
    next_ref: AtomicU64,
}

impl TypeRegistry {
    pub fn new(address: HostPort) -> Self {
        Self {
            address,
            exports: RwLock::new(HashMap::new()),
            next_ref: AtomicU64::new(1),
        }
    }

    pub fn address(&self) -> &HostPort {
        &self.address
    }

    /// Export a type under `type_name`, replacing any previous export of
    /// the same name. Returns the reference handed out in lookups.
    pub fn export(
        &self,
        type_name: impl Into<TypeIdentity>,
        calling_convention: CallingConvention,
    ) -> RemoteRef {
        let remote_ref = RemoteRef(self.next_ref.fetch_add(1, Ordering::Relaxed));
        let export = Export {
            remote_ref,
            calling_convention,
        };
        self.exports
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_name.into(), export);
        remote_ref
    }

    /// Export `T` under its canonical name.
    pub fn export_type<T: Named + ?Sized>(&self, calling_convention: CallingConvention) -> RemoteRef {
        self.export(T::type_identity(), calling_convention)
    }

    /// Stop exporting `type_name`. Returns whether it was exported.
    pub fn withdraw(&self, type_name: &TypeIdentity) -> bool {
        self.exports
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(type_name)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.exports.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lookup(&self, request: &TypeLookupRequest) -> LookupResponse {
        let exports = self.exports.read().unwrap_or_else(PoisonError::into_inner);
        match exports.get(&request.type_name) {
            Some(export) => LookupResponse::Found(RemoteTypeHandle::new(
                request.type_name.clone(),
                self.address.clone(),
                export.remote_ref,
                export.calling_convention,
            )),
            None => LookupResponse::NotFound,
        }
    }
}

/// Routes lookups to in-process registries keyed by address.
#[derive(Clone, Debug, Default)]
pub struct LoopbackChannel {
    registries: HashMap<HostPort, Arc<TypeRegistry>>,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve lookups for `registry.address()` from `registry`.
    pub fn with_registry(mut self, registry: Arc<TypeRegistry>) -> Self {
        self.registries.insert(registry.address().clone(), registry);
        self
    }

    fn registry_for(&self, address: &HostPort) -> Result<&Arc<TypeRegistry>, ChannelError> {
        self.registries
            .get(address)
            .ok_or_else(|| ChannelError::unavailable(format!("no process listening on {address}")))
    }
}

#[async_trait]
impl InvocationChannel for LoopbackChannel {
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError> {
        Ok(self.registry_for(&request.address)?.lookup(request))
    }
}
