use std::fs;
use std::path::Path;
use std::time::Duration;

use farcall_envelope::{
    CanonicalNames, CodecError, IdentityProvider, JsonCodec, MsgpackCodec, Named, QualifiedNames,
    TypeIdentity, ValueCodec,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolver::RemoteTypeResolver;
use crate::timeout::TimeoutChannel;
use crate::traits::InvocationChannel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    #[default]
    Msgpack,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingScheme {
    #[default]
    Canonical,
    Qualified,
}

/// Envelope and resolver settings, loaded from TOML.
///
/// ```toml
/// codec = "json"
/// type_names = "canonical"
/// lookup_timeout_ms = 2000
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FarcallConfig {
    pub codec: CodecKind,
    pub type_names: NamingScheme,
    /// Absent means lookups are not bounded in time.
    pub lookup_timeout_ms: Option<u64>,
}

impl FarcallConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn codec(&self) -> AnyCodec {
        match self.codec {
            CodecKind::Msgpack => AnyCodec::Msgpack(MsgpackCodec),
            CodecKind::Json => AnyCodec::Json(JsonCodec),
        }
    }

    pub fn identity_provider(&self) -> AnyNames {
        match self.type_names {
            NamingScheme::Canonical => AnyNames::Canonical(CanonicalNames),
            NamingScheme::Qualified => AnyNames::Qualified(QualifiedNames),
        }
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }

    /// A resolver over `channel` using the configured naming scheme, with
    /// lookups bounded by `lookup_timeout_ms` when set.
    pub fn build_resolver<C: InvocationChannel + 'static>(
        &self,
        channel: C,
    ) -> RemoteTypeResolver<Box<dyn InvocationChannel>, AnyNames> {
        let channel: Box<dyn InvocationChannel> = match self.lookup_timeout() {
            Some(timeout) => Box::new(TimeoutChannel::new(channel, timeout)),
            None => Box::new(channel),
        };
        RemoteTypeResolver::new(channel).with_identity_provider(self.identity_provider())
    }
}

/// A codec picked at runtime.
#[derive(Clone, Copy, Debug)]
pub enum AnyCodec {
    Msgpack(MsgpackCodec),
    Json(JsonCodec),
}

impl ValueCodec for AnyCodec {
    fn name(&self) -> &'static str {
        match self {
            Self::Msgpack(codec) => codec.name(),
            Self::Json(codec) => codec.name(),
        }
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Msgpack(codec) => codec.encode(value),
            Self::Json(codec) => codec.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Self::Msgpack(codec) => codec.decode(bytes),
            Self::Json(codec) => codec.decode(bytes),
        }
    }
}

/// A naming scheme picked at runtime.
#[derive(Clone, Copy, Debug)]
pub enum AnyNames {
    Canonical(CanonicalNames),
    Qualified(QualifiedNames),
}

impl IdentityProvider for AnyNames {
    fn identity_of<T: Named + ?Sized>(&self) -> TypeIdentity {
        match self {
            Self::Canonical(names) => names.identity_of::<T>(),
            Self::Qualified(names) => names.identity_of::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = FarcallConfig::from_toml("").expect("parse");
        assert_eq!(config, FarcallConfig::default());
        assert_eq!(config.codec().name(), "msgpack");
        assert_eq!(config.lookup_timeout(), None);
    }

    #[test]
    fn qualified_names_use_type_paths() {
        let config = FarcallConfig::from_toml("type_names = \"qualified\"").expect("parse");
        assert_eq!(
            config.identity_provider().identity_of::<String>(),
            TypeIdentity::new("alloc::string::String")
        );
    }

    #[test]
    fn rejects_unknown_codec() {
        let err = FarcallConfig::from_toml("codec = \"cbor\"").expect_err("cbor");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
