//! Per-type dispatch metadata.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use sable_core::{Dynamic, MetaMethod, RuntimeError, TypeHash};

/// Dispatch metadata for one runtime type.
///
/// Holds the type's methods grouped by name. Overloads are distinguished by
/// logical arity only; the first overload registered for an arity wins.
#[derive(Debug)]
pub struct MetaClass {
    name: String,
    type_hash: TypeHash,
    methods: FxHashMap<String, Vec<Arc<dyn MetaMethod>>>,
}

impl MetaClass {
    /// Create empty metadata for the type `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            methods: FxHashMap::default(),
        }
    }

    /// Qualified type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type hash.
    pub fn type_hash(&self) -> TypeHash {
        self.type_hash
    }

    /// Add a method.
    pub fn add_method(&mut self, method: Arc<dyn MetaMethod>) {
        self.methods
            .entry(method.name().to_string())
            .or_default()
            .push(method);
    }

    /// All overloads registered under `name`.
    pub fn methods(&self, name: &str) -> &[Arc<dyn MetaMethod>] {
        self.methods.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find the overload of `name` taking `arity` arguments.
    pub fn find_method(&self, name: &str, arity: usize) -> Option<&Arc<dyn MetaMethod>> {
        self.methods(name).iter().find(|m| m.arity() == arity)
    }

    /// Total number of methods.
    pub fn method_count(&self) -> usize {
        self.methods.values().map(Vec::len).sum()
    }

    /// Invoke a method by name.
    ///
    /// `args` is an argument bundle: a [`Dynamic::List`] is spread into
    /// individual arguments, [`Dynamic::Void`] means no arguments, and any
    /// other value is passed as the single argument.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::MethodNotFound`] when no overload matches the
    /// name and argument count; otherwise whatever the method returns.
    pub fn invoke_method(
        &self,
        receiver: Dynamic,
        name: &str,
        args: Dynamic,
    ) -> Result<Dynamic, RuntimeError> {
        let args = match args {
            Dynamic::List(items) => items,
            Dynamic::Void => Vec::new(),
            other => vec![other],
        };

        let method = self
            .find_method(name, args.len())
            .ok_or_else(|| RuntimeError::MethodNotFound {
                name: name.to_string(),
                arity: args.len(),
            })?;
        method.invoke(receiver, args)
    }
}
