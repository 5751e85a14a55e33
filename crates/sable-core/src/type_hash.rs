//! Name-derived identities for types and methods.
//!
//! Types and methods are keyed by hashes of their names, so the compiler and
//! the registry agree on identities without sharing a table, and a type can be
//! referred to before it is registered.
//!
//! # Examples
//!
//! ```
//! use sable_core::TypeHash;
//!
//! let point = TypeHash::from_name("geo.Point");
//! assert_eq!(point, TypeHash::from_name("geo.Point"));
//!
//! let m1 = TypeHash::from_method(point, "scale", &[TypeHash::from_name("int")]);
//! let m2 = TypeHash::from_method(point, "scale", &[TypeHash::from_name("float")]);
//! assert_ne!(m1, m2);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

// Seeds keep a type, a function and a method with the same name apart.
const TYPE_SEED: u64 = 0x7ab1_e000_0000_0001;
const FUNCTION_SEED: u64 = 0x7ab1_e000_0000_0002;
const METHOD_SEED: u64 = 0x7ab1_e000_0000_0003;

/// Identity of a type, free function or method overload.
///
/// `TypeHash(0)` is reserved for [`TypeHash::EMPTY`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// No type, e.g. the declaring type of an extension method without
    /// parameters.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Hash of a (possibly dotted) type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(xxh64(name.as_bytes(), TYPE_SEED))
    }

    /// Hash of a free function overload.
    pub fn from_function(name: &str, params: &[TypeHash]) -> Self {
        TypeHash(chain(xxh64(name.as_bytes(), FUNCTION_SEED), params))
    }

    /// Hash of a method overload on `owner`.
    pub fn from_method(owner: TypeHash, name: &str, params: &[TypeHash]) -> Self {
        let seed = xxh64(name.as_bytes(), METHOD_SEED ^ owner.0);
        TypeHash(chain(seed, params))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Feed each parameter hash through xxh64 seeded with the running value, so
/// both the parameters and their order are significant.
fn chain(seed: u64, params: &[TypeHash]) -> u64 {
    params
        .iter()
        .fold(seed, |acc, param| xxh64(&param.0.to_le_bytes(), acc))
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Hashes of the runtime's built-in types.
pub mod builtins {
    use super::TypeHash;

    /// `Object`, the top of the hierarchy and the type of argument bundles.
    pub fn object() -> TypeHash {
        TypeHash::from_name("Object")
    }

    /// `String`.
    pub fn string() -> TypeHash {
        TypeHash::from_name("String")
    }

    /// `int`.
    pub fn int() -> TypeHash {
        TypeHash::from_name("int")
    }

    /// `float`.
    pub fn float() -> TypeHash {
        TypeHash::from_name("float")
    }

    /// `bool`.
    pub fn bool() -> TypeHash {
        TypeHash::from_name("bool")
    }
}
