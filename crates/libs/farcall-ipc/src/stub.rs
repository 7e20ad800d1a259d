use async_trait::async_trait;

use crate::error::ChannelError;
use crate::traits::InvocationChannel;
use crate::types::{LookupResponse, TypeLookupRequest};

/// A channel with no remote process behind it. Every lookup fails with
/// `ChannelError::Unavailable`.
///
/// Useful as a placeholder while wiring a resolver before a transport exists.
pub struct StubChannel;

#[async_trait]
impl InvocationChannel for StubChannel {
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError> {
        Err(ChannelError::unavailable(format!(
            "stub channel: nothing listening on {}",
            request.address
        )))
    }
}
