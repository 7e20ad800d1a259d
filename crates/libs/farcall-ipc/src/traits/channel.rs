use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ChannelError;
use crate::types::{LookupResponse, TypeLookupRequest};

/// Request/response exchange with another process.
///
/// Timeouts and cancellation of in-flight requests are the channel's
/// responsibility. Dropping the returned future must abort the request.
#[async_trait]
pub trait InvocationChannel: Send + Sync {
    /// Ask the process at `request.address` for its type named
    /// `request.type_name`.
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError>;
}

#[async_trait]
impl<C: InvocationChannel + ?Sized> InvocationChannel for Arc<C> {
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError> {
        (**self).send_type_lookup(request).await
    }
}

#[async_trait]
impl<C: InvocationChannel + ?Sized> InvocationChannel for Box<C> {
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError> {
        (**self).send_type_lookup(request).await
    }
}
