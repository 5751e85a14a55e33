//! Values passed through dispatch: arguments, receivers and results.

use std::any::Any;
use std::fmt;

use crate::TypeHash;

/// One runtime value.
///
/// Not `Clone`: boxed native payloads are opaque. See
/// [`clone_if_possible`](Dynamic::clone_if_possible).
#[derive(Default)]
pub enum Dynamic {
    /// No value (the result of a method returning nothing).
    #[default]
    Void,
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    /// A type tag, used as a nominal receiver for dispatch.
    Type(TypeHash),
    /// The argument bundle of by-name dispatch.
    List(Vec<Dynamic>),
    /// A boxed Rust value, such as a registry `Instance`.
    Native(Box<dyn Any + Send + Sync>),
    Null,
}

impl Dynamic {
    /// Box a native value.
    pub fn native<T: Any + Send + Sync>(value: T) -> Self {
        Dynamic::Native(Box::new(value))
    }

    /// Kind name used in conversion and type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Void => "void",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Bool(_) => "bool",
            Dynamic::String(_) => "string",
            Dynamic::Type(_) => "type",
            Dynamic::List(_) => "list",
            Dynamic::Native(_) => "native",
            Dynamic::Null => "null",
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Dynamic::Void)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    /// Borrow the native payload as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Dynamic::Native(boxed) => boxed.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Mutably borrow the native payload as `T`, if it is one.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        match self {
            Dynamic::Native(boxed) => boxed.downcast_mut::<T>(),
            _ => None,
        }
    }

    /// A deep copy, or `None` when a boxed native value is reachable.
    pub fn clone_if_possible(&self) -> Option<Self> {
        match self {
            Dynamic::Void => Some(Dynamic::Void),
            Dynamic::Int(v) => Some(Dynamic::Int(*v)),
            Dynamic::Float(v) => Some(Dynamic::Float(*v)),
            Dynamic::Bool(v) => Some(Dynamic::Bool(*v)),
            Dynamic::String(s) => Some(Dynamic::String(s.clone())),
            Dynamic::Type(t) => Some(Dynamic::Type(*t)),
            Dynamic::List(items) => items
                .iter()
                .map(Dynamic::clone_if_possible)
                .collect::<Option<Vec<_>>>()
                .map(Dynamic::List),
            Dynamic::Native(_) => None,
            Dynamic::Null => Some(Dynamic::Null),
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Void => f.write_str("Void"),
            Dynamic::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Dynamic::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Dynamic::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Dynamic::String(s) => f.debug_tuple("String").field(s).finish(),
            Dynamic::Type(t) => write!(f, "Type({t})"),
            Dynamic::List(items) => f.debug_tuple("List").field(items).finish(),
            Dynamic::Native(_) => f.write_str("Native(..)"),
            Dynamic::Null => f.write_str("Null"),
        }
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Dynamic::Void, Dynamic::Void) => true,
            (Dynamic::Int(a), Dynamic::Int(b)) => a == b,
            (Dynamic::Float(a), Dynamic::Float(b)) => a == b,
            (Dynamic::Bool(a), Dynamic::Bool(b)) => a == b,
            (Dynamic::String(a), Dynamic::String(b)) => a == b,
            (Dynamic::Type(a), Dynamic::Type(b)) => a == b,
            (Dynamic::List(a), Dynamic::List(b)) => a == b,
            (Dynamic::Null, Dynamic::Null) => true,
            // boxed values are never equal, not even to themselves
            _ => false,
        }
    }
}
