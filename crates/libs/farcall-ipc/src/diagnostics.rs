use farcall_envelope::TypeIdentity;
use serde::{Deserialize, Serialize};

use crate::traits::DiagnosticSink;
use crate::types::{HostPort, RemoteTypeHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// The resolved type is dynamically defined; arbitrary members are not
    /// safe to invoke through the handle.
    DynamicDispatch,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub type_name: TypeIdentity,
    pub address: HostPort,
    pub message: String,
}

impl Diagnostic {
    pub fn dynamic_dispatch(handle: &RemoteTypeHandle) -> Self {
        Self {
            kind: DiagnosticKind::DynamicDispatch,
            type_name: handle.type_name.clone(),
            address: handle.address.clone(),
            message: format!(
                "'{}' is dynamically defined in the remote process at {}. Only members \
                 explicitly exposed for cross-process dispatch are safe to invoke.",
                handle.type_name, handle.address
            ),
        }
    }
}

/// Writes diagnostics to the `log` facade at warn level. The default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!("resolver: {}", diagnostic.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CallingConvention, RemoteRef};

    #[test]
    fn dynamic_dispatch_message_names_the_type() {
        let handle = RemoteTypeHandle::new(
            TypeIdentity::new("SwiftWidget"),
            HostPort::local(7000),
            RemoteRef(1),
            CallingConvention::DynamicallyDefined,
        );
        let diagnostic = Diagnostic::dynamic_dispatch(&handle);
        assert_eq!(diagnostic.kind, DiagnosticKind::DynamicDispatch);
        assert_eq!(diagnostic.type_name, TypeIdentity::new("SwiftWidget"));
        assert!(diagnostic.message.starts_with("'SwiftWidget' is dynamically defined"));
        assert!(diagnostic.message.contains("127.0.0.1:7000"));
    }
}
