//! Type identities and the providers that derive them from static types.
//!
//! Identities are plain names. Two unrelated types that print the same name
//! are indistinguishable; use [`QualifiedNames`] when that matters.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical name of a type in the caller's type universe.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeIdentity(String);

impl TypeIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Declared canonical name of `T`.
    pub fn of<T: Named + ?Sized>() -> Self {
        T::type_identity()
    }

    /// Fully qualified Rust path of `T`, as reported by the compiler.
    pub fn qualified<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeIdentity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TypeIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeIdentity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for TypeIdentity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeIdentity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A type with a declared, portable canonical name.
///
/// The name belongs to the static type, not to any value of it: `None` of
/// an `Option<i64>` is still `Optional<Int>`.
pub trait Named {
    fn type_identity() -> TypeIdentity;
}

/// Implements [`Named`] for a caller-defined type.
///
/// ```rust
/// use farcall_envelope::{named, Named};
///
/// struct Point;
/// struct Velocity;
/// named!(Point);
/// named!(Velocity => "physics.Velocity");
///
/// assert_eq!(Point::type_identity().as_str(), "Point");
/// assert_eq!(Velocity::type_identity().as_str(), "physics.Velocity");
/// ```
#[macro_export]
macro_rules! named {
    ($ty:ty) => {
        $crate::named!($ty => stringify!($ty));
    };
    ($ty:ty => $name:expr) => {
        impl $crate::Named for $ty {
            fn type_identity() -> $crate::TypeIdentity {
                $crate::TypeIdentity::new($name)
            }
        }
    };
}

macro_rules! named_primitives {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Named for $ty {
                fn type_identity() -> TypeIdentity {
                    TypeIdentity::new($name)
                }
            }
        )*
    };
}

named_primitives! {
    () => "Void",
    bool => "Bool",
    char => "Character",
    i8 => "Int8",
    i16 => "Int16",
    i32 => "Int32",
    i64 => "Int",
    i128 => "Int128",
    isize => "Int",
    u8 => "UInt8",
    u16 => "UInt16",
    u32 => "UInt32",
    u64 => "UInt",
    u128 => "UInt128",
    usize => "UInt",
    f32 => "Float",
    f64 => "Double",
    str => "String",
    String => "String",
}

/// Nested optionals get their own tag, but the payload cannot tell
/// `Some(None)` from `None`; see [`ValueCodec`](crate::ValueCodec).
impl<T: Named> Named for Option<T> {
    fn type_identity() -> TypeIdentity {
        TypeIdentity(format!("Optional<{}>", T::type_identity()))
    }
}

impl<T: Named> Named for Vec<T> {
    fn type_identity() -> TypeIdentity {
        <[T]>::type_identity()
    }
}

impl<T: Named> Named for [T] {
    fn type_identity() -> TypeIdentity {
        TypeIdentity(format!("List<{}>", T::type_identity()))
    }
}

impl<K: Named, V: Named> Named for BTreeMap<K, V> {
    fn type_identity() -> TypeIdentity {
        TypeIdentity(format!("Map<{}, {}>", K::type_identity(), V::type_identity()))
    }
}

impl<K: Named, V: Named, S> Named for HashMap<K, V, S> {
    fn type_identity() -> TypeIdentity {
        BTreeMap::<K, V>::type_identity()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn type_identity() -> TypeIdentity {
        T::type_identity()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn type_identity() -> TypeIdentity {
        T::type_identity()
    }
}

impl<A: Named, B: Named> Named for (A, B) {
    fn type_identity() -> TypeIdentity {
        TypeIdentity(format!("({}, {})", A::type_identity(), B::type_identity()))
    }
}

impl<A: Named, B: Named, C: Named> Named for (A, B, C) {
    fn type_identity() -> TypeIdentity {
        TypeIdentity(format!(
            "({}, {}, {})",
            A::type_identity(),
            B::type_identity(),
            C::type_identity()
        ))
    }
}

/// Maps a static type to the identity stamped on (and checked against)
/// envelopes. Pure; holds no registry.
pub trait IdentityProvider: Send + Sync {
    fn identity_of<T: Named + ?Sized>(&self) -> TypeIdentity;
}

impl<P: IdentityProvider + ?Sized> IdentityProvider for &P {
    fn identity_of<T: Named + ?Sized>(&self) -> TypeIdentity {
        (**self).identity_of::<T>()
    }
}

/// Uses each type's declared [`Named`] identity. The default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanonicalNames;

impl IdentityProvider for CanonicalNames {
    fn identity_of<T: Named + ?Sized>(&self) -> TypeIdentity {
        T::type_identity()
    }
}

/// Uses the compiler's fully qualified type path. Both sides must be built
/// from the same crate layout for names to match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QualifiedNames;

impl IdentityProvider for QualifiedNames {
    fn identity_of<T: Named + ?Sized>(&self) -> TypeIdentity {
        TypeIdentity::qualified::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;
    named!(Sample);

    #[test]
    fn primitive_names() {
        assert_eq!(TypeIdentity::of::<i64>(), "Int");
        assert_eq!(TypeIdentity::of::<f32>(), "Float");
        assert_eq!(TypeIdentity::of::<String>(), "String");
        assert_eq!(TypeIdentity::of::<str>(), "String");
    }

    #[test]
    fn composite_names() {
        assert_eq!(TypeIdentity::of::<Option<i64>>(), "Optional<Int>");
        assert_eq!(TypeIdentity::of::<Vec<i64>>(), "List<Int>");
        assert_eq!(TypeIdentity::of::<Vec<Option<String>>>(), "List<Optional<String>>");
        assert_eq!(TypeIdentity::of::<BTreeMap<String, f64>>(), "Map<String, Double>");
        assert_eq!(TypeIdentity::of::<HashMap<String, f64>>(), "Map<String, Double>");
        assert_eq!(TypeIdentity::of::<(i32, bool)>(), "(Int32, Bool)");
        assert_eq!(TypeIdentity::of::<Box<Sample>>(), "Sample");
    }

    #[test]
    fn macro_uses_type_path_by_default() {
        assert_eq!(TypeIdentity::of::<Sample>(), "Sample");
        assert_eq!(TypeIdentity::of::<Option<Sample>>(), "Optional<Sample>");
    }

    #[test]
    fn providers_disagree_on_spelling() {
        let canonical = CanonicalNames.identity_of::<Vec<i64>>();
        let qualified = QualifiedNames.identity_of::<Vec<i64>>();
        assert_eq!(canonical, "List<Int>");
        assert_eq!(qualified.as_str(), std::any::type_name::<Vec<i64>>());
        assert_ne!(canonical, qualified);
    }

    #[test]
    fn identity_serializes_as_plain_string() {
        let json = serde_json::to_string(&TypeIdentity::new("Int")).expect("serialize");
        assert_eq!(json, "\"Int\"");
    }
}
