//! Conversion traits between Rust values and [`Dynamic`] slots.
//!
//! - [`FromDynamic`]: extract a Rust value from a slot
//! - [`IntoDynamic`]: convert a Rust value into a slot

use super::Dynamic;

/// Extract a value from a Dynamic slot.
pub trait FromDynamic: Sized {
    /// Name of the expected slot kind, used in conversion errors.
    const EXPECTED: &'static str;

    /// Extract a value, or `None` if the slot holds an incompatible kind.
    fn from_dynamic(value: &Dynamic) -> Option<Self>;
}

/// Convert a value into a Dynamic slot.
pub trait IntoDynamic {
    /// Convert this value into a Dynamic slot.
    fn into_dynamic(self) -> Dynamic;
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl FromDynamic for $ty {
                const EXPECTED: &'static str = "int";

                fn from_dynamic(value: &Dynamic) -> Option<Self> {
                    match value {
                        Dynamic::Int(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    }
                }
            }

            impl IntoDynamic for $ty {
                fn into_dynamic(self) -> Dynamic {
                    Dynamic::Int(self as i64)
                }
            }
        )*
    };
}

impl_int!(i32, i64);

impl FromDynamic for f64 {
    const EXPECTED: &'static str = "float";

    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Float(v) => Some(*v),
            Dynamic::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl IntoDynamic for f64 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Float(self)
    }
}

impl FromDynamic for bool {
    const EXPECTED: &'static str = "bool";

    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl IntoDynamic for bool {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Bool(self)
    }
}

impl FromDynamic for String {
    const EXPECTED: &'static str = "string";

    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl IntoDynamic for String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self)
    }
}

impl IntoDynamic for &str {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self.to_string())
    }
}

impl IntoDynamic for () {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Void
    }
}

impl IntoDynamic for Dynamic {
    fn into_dynamic(self) -> Dynamic {
        self
    }
}
