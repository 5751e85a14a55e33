//! MetaClassRegistry - runtime types, their constructors and dispatch metadata.
//!
//! # Storage Model
//!
//! - **Types**: default constructors stored by `TypeHash` in a shared table.
//!   Extension methods hold a handle to the same table to build receivers.
//! - **Meta classes**: one [`MetaClass`] per registered type, keyed by `TypeHash`.
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded and read-only afterwards. If
//! registration must happen concurrently, the caller wraps the registry in
//! appropriate synchronization (e.g. `Arc<RwLock<_>>`).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sable_core::{CallContext, Dynamic, NativeMethod, TypeHash, builtins};
//! use sable_registry::{Instance, MetaClassRegistry};
//!
//! let mut registry = MetaClassRegistry::new();
//! let point = registry
//!     .register_type("Point", || Instance::new(TypeHash::from_name("Point")).into_dynamic())
//!     .unwrap();
//!
//! // static int twice(Point p, int n) { return n * 2 }
//! let twice = NativeMethod::function(
//!     "twice",
//!     vec![point, builtins::int()],
//!     |ctx: &mut CallContext| {
//!         let n: i64 = ctx.arg(1)?;
//!         ctx.set_return(n * 2);
//!         Ok(())
//!     },
//! );
//! registry.register_extension(Arc::new(twice)).unwrap();
//!
//! let meta = registry.meta_class(point).unwrap();
//! let out = meta.invoke_method(Dynamic::Type(point), "twice", Dynamic::Int(21)).unwrap();
//! assert_eq!(out, Dynamic::Int(42));
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use sable_core::{
    Dynamic, ExtensionMethod, InstanceFactory, MetaMethod, RegistrationError, RuntimeError,
    TypeHash, builtins,
};
use tracing::debug;

use crate::instance::Instance;
use crate::meta_class::MetaClass;

type Constructor = Arc<dyn Fn() -> Dynamic + Send + Sync>;

/// A registered type: its name and optional default constructor.
struct TypeEntry {
    name: String,
    constructor: Option<Constructor>,
}

/// Default constructors by type, shared with extension methods.
#[derive(Default)]
struct TypeTable {
    entries: RwLock<FxHashMap<TypeHash, TypeEntry>>,
}

impl TypeTable {
    fn contains(&self, ty: TypeHash) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&ty)
    }

    fn insert(&self, ty: TypeHash, entry: TypeEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ty, entry);
    }
}

impl InstanceFactory for TypeTable {
    fn instantiate(&self, ty: TypeHash) -> Result<Dynamic, RuntimeError> {
        // Clone the constructor out so it runs without the lock held
        let constructor = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            let entry = entries
                .get(&ty)
                .ok_or_else(|| RuntimeError::InstantiationFailure {
                    type_name: ty.to_string(),
                    reason: "type is not registered".to_string(),
                })?;
            entry
                .constructor
                .clone()
                .ok_or_else(|| RuntimeError::InstantiationFailure {
                    type_name: entry.name.clone(),
                    reason: "no default constructor".to_string(),
                })?
        };
        Ok(constructor())
    }
}

/// Registry of runtime types and their dispatch metadata.
#[derive(Default)]
pub struct MetaClassRegistry {
    types: Arc<TypeTable>,
    meta_classes: FxHashMap<TypeHash, MetaClass>,
}

impl MetaClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Types
    // ==========================================================================

    /// Register a type with a default constructor.
    ///
    /// Returns the type's hash.
    pub fn register_type<F>(
        &mut self,
        name: &str,
        constructor: F,
    ) -> Result<TypeHash, RegistrationError>
    where
        F: Fn() -> Dynamic + Send + Sync + 'static,
    {
        self.insert_type(name, Some(Arc::new(constructor)))
    }

    /// Register a type that cannot be default-constructed.
    pub fn register_opaque_type(&mut self, name: &str) -> Result<TypeHash, RegistrationError> {
        self.insert_type(name, None)
    }

    fn insert_type(
        &mut self,
        name: &str,
        constructor: Option<Constructor>,
    ) -> Result<TypeHash, RegistrationError> {
        let ty = TypeHash::from_name(name);
        if self.types.contains(ty) {
            return Err(RegistrationError::DuplicateType(name.to_string()));
        }

        self.types.insert(
            ty,
            TypeEntry {
                name: name.to_string(),
                constructor,
            },
        );
        self.meta_classes.insert(ty, MetaClass::new(name));
        debug!(type_name = name, "registered type");
        Ok(ty)
    }

    /// Check if a type is registered.
    pub fn contains_type(&self, ty: TypeHash) -> bool {
        self.meta_classes.contains_key(&ty)
    }

    // ==========================================================================
    // Meta classes
    // ==========================================================================

    /// Get the meta class of a type.
    pub fn meta_class(&self, ty: TypeHash) -> Option<&MetaClass> {
        self.meta_classes.get(&ty)
    }

    /// Get the meta class of a type by name.
    pub fn meta_class_by_name(&self, name: &str) -> Option<&MetaClass> {
        self.meta_class(TypeHash::from_name(name))
    }

    /// Get the meta class of a runtime value.
    ///
    /// Type tags resolve to the tagged type, boxed [`Instance`]s to their
    /// type, and primitive values to the matching built-in type if it is
    /// registered.
    pub fn meta_class_of(&self, value: &Dynamic) -> Option<&MetaClass> {
        let ty = match value {
            Dynamic::Type(ty) => *ty,
            Dynamic::Native(_) => value.downcast_ref::<Instance>()?.type_hash(),
            Dynamic::Int(_) => builtins::int(),
            Dynamic::Float(_) => builtins::float(),
            Dynamic::Bool(_) => builtins::bool(),
            Dynamic::String(_) => builtins::string(),
            Dynamic::Void | Dynamic::List(_) | Dynamic::Null => return None,
        };
        self.meta_class(ty)
    }

    // ==========================================================================
    // Methods
    // ==========================================================================

    /// Attach a method to its declaring type.
    pub fn register_method(
        &mut self,
        method: Arc<dyn MetaMethod>,
    ) -> Result<(), RegistrationError> {
        let ty = method.declaring_type();
        let meta = self.meta_classes.get_mut(&ty).ok_or_else(|| {
            RegistrationError::InvalidDeclaration(format!(
                "method '{}' declared on unregistered type {ty}",
                method.name()
            ))
        })?;
        debug!(type_name = meta.name(), method = method.name(), "registered method");
        meta.add_method(method);
        Ok(())
    }

    /// Register a receiver-first function as a method of its first
    /// parameter's type.
    ///
    /// The delegate is wrapped in an [`ExtensionMethod`] that builds its
    /// receiver through this registry's default constructors.
    pub fn register_extension(
        &mut self,
        delegate: Arc<dyn MetaMethod>,
    ) -> Result<(), RegistrationError> {
        let Some(&receiver) = delegate.parameter_types().first() else {
            return Err(RegistrationError::InvalidDeclaration(format!(
                "extension method '{}' has no receiver parameter",
                delegate.name()
            )));
        };
        if !self.contains_type(receiver) {
            return Err(RegistrationError::InvalidDeclaration(format!(
                "extension method '{}' extends unregistered type {receiver}",
                delegate.name()
            )));
        }

        let factory: Arc<dyn InstanceFactory> = self.types.clone();
        let extension = ExtensionMethod::new(delegate, factory);
        self.register_method(Arc::new(extension))
    }

    // ==========================================================================
    // Dispatch
    // ==========================================================================

    /// Invoke a method by name on a runtime value.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::TypeMismatch`] when the receiver's type is not
    /// registered, and otherwise whatever [`MetaClass::invoke_method`] returns.
    pub fn invoke_method(
        &self,
        receiver: Dynamic,
        name: &str,
        args: Dynamic,
    ) -> Result<Dynamic, RuntimeError> {
        let meta = self
            .meta_class_of(&receiver)
            .ok_or_else(|| RuntimeError::TypeMismatch {
                expected: "registered type".to_string(),
                actual: receiver.type_name().to_string(),
            })?;
        meta.invoke_method(receiver, name, args)
    }
}

impl InstanceFactory for MetaClassRegistry {
    fn instantiate(&self, ty: TypeHash) -> Result<Dynamic, RuntimeError> {
        self.types.instantiate(ty)
    }
}
