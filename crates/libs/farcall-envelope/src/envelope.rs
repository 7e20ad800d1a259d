//! The typed envelope and its wire representation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::codec::{msgpack_from_slice, MsgpackCodec, ValueCodec};
use crate::error::EnvelopeError;
use crate::identity::{CanonicalNames, IdentityProvider, Named, TypeIdentity};

/// An encoded value paired with the canonical name of its static type.
///
/// Immutable once built. Unwrapping only reads, so the same envelope may be
/// unwrapped any number of times, with the same or different expected types.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedEnvelope {
    #[serde(rename = "type")]
    type_tag: TypeIdentity,
    #[serde(rename = "data", with = "serde_bytes")]
    payload: Vec<u8>,
}

impl TypedEnvelope {
    /// Wrap `value` with the default codec and canonical type names.
    pub fn wrap<T>(value: &T) -> Result<Self, EnvelopeError>
    where
        T: Serialize + Named + ?Sized,
    {
        Self::wrap_with(value, &MsgpackCodec, &CanonicalNames)
    }

    /// Wrap `value`, naming it through `names` and encoding it with `codec`.
    pub fn wrap_with<T, C, P>(value: &T, codec: &C, names: &P) -> Result<Self, EnvelopeError>
    where
        T: Serialize + Named + ?Sized,
        C: ValueCodec,
        P: IdentityProvider,
    {
        Self::wrap_as(value, names.identity_of::<T>(), codec)
    }

    /// Wrap `value` under an explicitly supplied identity.
    pub fn wrap_as<T, C>(value: &T, type_tag: TypeIdentity, codec: &C) -> Result<Self, EnvelopeError>
    where
        T: Serialize + ?Sized,
        C: ValueCodec,
    {
        let payload = codec.encode(value).map_err(|err| EnvelopeError::Encode {
            type_name: type_tag.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { type_tag, payload })
    }

    /// Assemble an envelope from an already encoded payload.
    pub fn from_parts(type_tag: impl Into<TypeIdentity>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            type_tag: type_tag.into(),
            payload: payload.into(),
        }
    }

    pub fn type_tag(&self) -> &TypeIdentity {
        &self.type_tag
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether this envelope was built from `T` under canonical names.
    pub fn is<T: Named + ?Sized>(&self) -> bool {
        self.type_tag == T::type_identity()
    }

    /// Decode the payload as `T` with the default codec and canonical names.
    pub fn unwrap<T>(&self) -> Result<T, EnvelopeError>
    where
        T: DeserializeOwned + Named,
    {
        self.unwrap_with(&MsgpackCodec, &CanonicalNames)
    }

    pub fn unwrap_with<T, C, P>(&self, codec: &C, names: &P) -> Result<T, EnvelopeError>
    where
        T: DeserializeOwned + Named,
        C: ValueCodec,
        P: IdentityProvider,
    {
        self.unwrap_as(&names.identity_of::<T>(), codec)
    }

    /// Decode the payload as `T`, provided `expected` matches the type tag.
    ///
    /// The tag is compared before the payload is touched; a mismatch never
    /// reaches the codec.
    pub fn unwrap_as<T, C>(&self, expected: &TypeIdentity, codec: &C) -> Result<T, EnvelopeError>
    where
        T: DeserializeOwned,
        C: ValueCodec,
    {
        if *expected != self.type_tag {
            return Err(EnvelopeError::type_mismatch(
                expected.as_str(),
                self.type_tag.as_str(),
            ));
        }
        codec.decode(&self.payload).map_err(|err| EnvelopeError::Decode {
            type_name: expected.to_string(),
            message: err.to_string(),
        })
    }

    /// Encode as a MessagePack map `{type, data}`.
    pub fn to_msgpack(&self) -> Result<Vec<u8>, EnvelopeError> {
        rmp_serde::to_vec_named(self).map_err(EnvelopeError::invalid)
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        msgpack_from_slice(bytes).map_err(EnvelopeError::invalid)
    }

    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string(self).map_err(EnvelopeError::invalid)
    }

    pub fn from_json(input: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(input).map_err(EnvelopeError::invalid)
    }
}

/// Produces an envelope straight from a value.
pub trait IntoEnvelope: Serialize + Named {
    fn to_envelope(&self) -> Result<TypedEnvelope, EnvelopeError> {
        TypedEnvelope::wrap(self)
    }
}

impl<T: Serialize + Named + ?Sized> IntoEnvelope for T {}
