use serde::{Deserialize, Serialize};

/// Transport-level failures reported by an [`InvocationChannel`].
///
/// The resolver hands these back to its caller unchanged.
///
/// [`InvocationChannel`]: crate::InvocationChannel
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChannelError {
    #[error("unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("timeout: {operation}")]
    Timeout { operation: String },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("protocol error: {message}")]
    Protocol { message: String },

    #[error("remote error: {message}")]
    Remote { message: String },
}

impl ChannelError {
    /// Returns `true` for transient errors that may succeed on retry.
    ///
    /// Advisory only; retry policy belongs to the caller or the channel.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::Timeout { .. } | Self::Transport { .. }
        )
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

/// Errors from loading a [`FarcallConfig`](crate::FarcallConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
