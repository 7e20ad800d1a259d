use std::fmt;

use farcall_envelope::TypeIdentity;
use serde::{Deserialize, Serialize};

/// Host used by [`HostPort::local`] and [`HostPort::named`].
pub const LOCALHOST: &str = "127.0.0.1";

// ── Addressing ────────────────────────────────────────────────────────────────

/// Address of a host service in another process.
///
/// A service is identified either by port, or by name (port `0`). Services
/// running on an attached device also carry the device serial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HostPort {
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub device_serial: Option<String>,
}

impl HostPort {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            name: None,
            device_serial: None,
        }
    }

    pub fn local(port: u16) -> Self {
        Self::new(LOCALHOST, port)
    }

    /// A service identified by a unique name rather than a port.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(LOCALHOST, 0)
        }
    }

    /// A local port forwarded to a service on an attached device.
    pub fn on_device(port: u16, device_serial: impl Into<String>) -> Self {
        Self {
            device_serial: Some(device_serial.into()),
            ..Self::local(port)
        }
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.device_serial) {
            (Some(name), _) => write!(f, "{name}@{}", self.host),
            (None, Some(serial)) => write!(f, "{}:{}#{serial}", self.host, self.port),
            (None, None) => write!(f, "{}:{}", self.host, self.port),
        }
    }
}

// ── Remote types ──────────────────────────────────────────────────────────────

/// Opaque reference issued by the remote type registry. Only the channel
/// that produced it can route calls with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteRef(pub u64);

/// How a remote type dispatches calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallingConvention {
    /// Dispatch is defined by the host platform's native object model and is
    /// compatible with cross-process invocation for every member.
    StaticallyBound,
    /// Defined in a higher-level language layer. Only members explicitly
    /// exposed for cross-process dispatch may be invoked.
    DynamicallyDefined,
}

impl CallingConvention {
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::DynamicallyDefined)
    }
}

/// The remote process's counterpart to a local type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct RemoteTypeHandle {
    pub type_name: TypeIdentity,
    pub address: HostPort,
    pub remote_ref: RemoteRef,
    pub calling_convention: CallingConvention,
}

impl RemoteTypeHandle {
    pub fn new(
        type_name: TypeIdentity,
        address: HostPort,
        remote_ref: RemoteRef,
        calling_convention: CallingConvention,
    ) -> Self {
        Self {
            type_name,
            address,
            remote_ref,
            calling_convention,
        }
    }

    pub fn is_dynamically_defined(&self) -> bool {
        self.calling_convention.is_dynamic()
    }
}

// ── Lookup protocol ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TypeLookupRequest {
    pub type_name: TypeIdentity,
    pub address: HostPort,
}

impl TypeLookupRequest {
    pub fn new(type_name: TypeIdentity, address: HostPort) -> Self {
        Self { type_name, address }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupResponse {
    Found(RemoteTypeHandle),
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_port_display() {
        assert_eq!(HostPort::new("10.0.0.2", 4242).to_string(), "10.0.0.2:4242");
        assert_eq!(HostPort::local(8000).to_string(), "127.0.0.1:8000");
        assert_eq!(HostPort::named("app").to_string(), "app@127.0.0.1");
        assert_eq!(
            HostPort::on_device(9000, "SERIAL-1").to_string(),
            "127.0.0.1:9000#SERIAL-1"
        );
    }

    #[test]
    fn named_port_is_zero() {
        let port = HostPort::named("app");
        assert_eq!(port.port, 0);
        assert_eq!(port.device_serial, None);
    }

    #[test]
    fn only_dynamic_convention_is_dynamic() {
        assert!(CallingConvention::DynamicallyDefined.is_dynamic());
        assert!(!CallingConvention::StaticallyBound.is_dynamic());
    }

    #[test]
    fn lookup_response_round_trips() {
        let handle = RemoteTypeHandle::new(
            TypeIdentity::new("Widget"),
            HostPort::local(7000),
            RemoteRef(3),
            CallingConvention::StaticallyBound,
        );
        for response in [LookupResponse::Found(handle), LookupResponse::NotFound] {
            let bytes = rmp_serde::to_vec_named(&response).expect("encode");
            let decoded: LookupResponse = rmp_serde::from_slice(&bytes).expect("decode");
            assert_eq!(decoded, response);
        }
    }
}
