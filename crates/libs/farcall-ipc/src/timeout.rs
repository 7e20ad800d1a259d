use std::time::Duration;

use async_trait::async_trait;

use crate::error::ChannelError;
use crate::traits::InvocationChannel;
use crate::types::{LookupResponse, TypeLookupRequest};

/// Bounds every lookup on the wrapped channel.
///
/// An elapsed lookup is dropped, which aborts it on the inner channel, and
/// is reported as `ChannelError::Timeout`. Requires a tokio runtime with the
/// time driver enabled.
#[derive(Clone, Debug)]
pub struct TimeoutChannel<C> {
    inner: C,
    timeout: Duration,
}

impl<C> TimeoutChannel<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

#[async_trait]
impl<C: InvocationChannel> InvocationChannel for TimeoutChannel<C> {
    async fn send_type_lookup(
        &self,
        request: &TypeLookupRequest,
    ) -> Result<LookupResponse, ChannelError> {
        match tokio::time::timeout(self.timeout, self.inner.send_type_lookup(request)).await {
            Ok(result) => result,
            Err(_) => Err(ChannelError::Timeout {
                operation: format!(
                    "type lookup for '{}' at {} after {}ms",
                    request.type_name,
                    request.address,
                    self.timeout.as_millis()
                ),
            }),
        }
    }
}
