//! Value codecs producing envelope payloads.

use std::io::Cursor;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A codec failure, tagged with the codec that produced it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{codec}: {message}")]
pub struct CodecError {
    pub codec: &'static str,
    pub message: String,
}

impl CodecError {
    pub fn new(codec: &'static str, message: impl ToString) -> Self {
        Self {
            codec,
            message: message.to_string(),
        }
    }
}

/// Generic encode/decode capability for envelope payloads.
///
/// Implementations must round-trip structured values, absent optionals and
/// primitives, and must be pure functions of their input. Input left over
/// after the decoded value is an error.
///
/// Neither bundled codec distinguishes `Some(None)` from `None`: both encode
/// to nil, so a nested optional holding an inner `None` decodes as the outer
/// `None`.
pub trait ValueCodec: Send + Sync {
    /// Short codec name used in error messages.
    fn name(&self) -> &'static str;

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

impl<C: ValueCodec + ?Sized> ValueCodec for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        (**self).encode(value)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (**self).decode(bytes)
    }
}

/// MessagePack with named struct fields. The default payload codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsgpackCodec;

impl ValueCodec for MsgpackCodec {
    fn name(&self) -> &'static str {
        "msgpack"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        rmp_serde::to_vec_named(value).map_err(|err| CodecError::new(self.name(), err))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        msgpack_from_slice(bytes).map_err(|message| CodecError::new(self.name(), message))
    }
}

/// Decode exactly one msgpack value spanning all of `bytes`.
pub(crate) fn msgpack_from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
    let mut cursor = Cursor::new(bytes);
    let value = T::deserialize(&mut rmp_serde::Deserializer::new(&mut cursor))
        .map_err(|err| err.to_string())?;
    let trailing = (bytes.len() as u64).saturating_sub(cursor.position());
    if trailing > 0 {
        return Err(format!("{trailing} trailing bytes after value"));
    }
    Ok(value)
}

/// UTF-8 JSON payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl ValueCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|err| CodecError::new(self.name(), err))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|err| CodecError::new(self.name(), err))
    }
}
