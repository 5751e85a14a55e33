//! A minimal runtime object.

use rustc_hash::FxHashMap;
use sable_core::{Dynamic, TypeHash};

/// A runtime object: its type plus named field values.
///
/// Registered default constructors usually return one of these boxed in
/// [`Dynamic::Native`], which lets
/// [`MetaClassRegistry::meta_class_of`](crate::MetaClassRegistry::meta_class_of)
/// find the object's type.
#[derive(Debug)]
pub struct Instance {
    type_hash: TypeHash,
    fields: FxHashMap<String, Dynamic>,
}

impl Instance {
    /// Create an instance of `type_hash` with no fields set.
    pub fn new(type_hash: TypeHash) -> Self {
        Self {
            type_hash,
            fields: FxHashMap::default(),
        }
    }

    /// Builder-style field initialization.
    pub fn with_field(mut self, name: impl Into<String>, value: Dynamic) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// The instance's type.
    pub fn type_hash(&self) -> TypeHash {
        self.type_hash
    }

    /// Read a field.
    pub fn get(&self, name: &str) -> Option<&Dynamic> {
        self.fields.get(name)
    }

    /// Write a field, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Dynamic) -> Option<Dynamic> {
        self.fields.insert(name.into(), value)
    }

    /// Box the instance as a runtime value.
    pub fn into_dynamic(self) -> Dynamic {
        Dynamic::native(self)
    }
}
