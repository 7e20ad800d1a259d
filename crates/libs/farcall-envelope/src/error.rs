use serde::{Deserialize, Serialize};

/// Errors returned while wrapping, unwrapping or parsing envelopes.
///
/// `TypeMismatch` and `Decode` both surface from `unwrap` but point at
/// different faults: the first is a metadata mismatch detected before the
/// payload is touched, the second is a payload the codec could not read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EnvelopeError {
    #[error("failed to encode {type_name}: {message}")]
    Encode { type_name: String, message: String },

    #[error("expecting to decode {expected} but the envelope holds {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("malformed {type_name} payload: {message}")]
    Decode { type_name: String, message: String },

    #[error("invalid envelope: {message}")]
    InvalidEnvelope { message: String },
}

impl EnvelopeError {
    /// Returns `true` when the caller asked for a type other than the one the
    /// envelope was built with. The caller may probe again with another type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Convenience constructor for `TypeMismatch`.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub(crate) fn invalid(message: impl ToString) -> Self {
        Self::InvalidEnvelope {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_types() {
        let err = EnvelopeError::type_mismatch("Int", "EDOTestingStruct");
        assert_eq!(
            err.to_string(),
            "expecting to decode Int but the envelope holds EDOTestingStruct"
        );
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn decode_is_not_a_mismatch() {
        let err = EnvelopeError::Decode {
            type_name: "Int".into(),
            message: "truncated".into(),
        };
        assert!(!err.is_type_mismatch());
    }
}
