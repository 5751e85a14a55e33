//! Reflective method interface and its native-backed implementation.

use std::fmt;

use crate::error::RuntimeError;
use crate::{Modifiers, TypeHash};

use super::{CallContext, Dynamic, NativeCallable, NativeFn};

/// Reflection view of a callable method.
///
/// `parameter_types` describes what a caller passes; `invocation_parameter_types`
/// describes what the underlying implementation actually receives. The two
/// only differ for adapters that hide a parameter.
pub trait MetaMethod: Send + Sync + fmt::Debug {
    /// Simple method name.
    fn name(&self) -> &str;

    /// The type this method is looked up on.
    fn declaring_type(&self) -> TypeHash;

    /// Logical parameter types, as seen by callers.
    fn parameter_types(&self) -> &[TypeHash];

    /// Physical parameter types, as seen by the implementation.
    fn invocation_parameter_types(&self) -> &[TypeHash] {
        self.parameter_types()
    }

    /// Access and dispatch modifiers.
    fn modifiers(&self) -> Modifiers;

    /// Whether the method is dispatched without a live receiver.
    fn is_static(&self) -> bool {
        self.modifiers().is_static()
    }

    /// Logical parameter count.
    fn arity(&self) -> usize {
        self.parameter_types().len()
    }

    /// Invoke the method.
    ///
    /// `args` must hold exactly [`arity`](MetaMethod::arity) values.
    fn invoke(&self, receiver: Dynamic, args: Vec<Dynamic>) -> Result<Dynamic, RuntimeError>;
}

/// Default-construction capability for runtime types.
pub trait InstanceFactory: Send + Sync {
    /// Create a fresh default instance of `ty`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InstantiationFailure`] when the type is unknown
    /// or has no default constructor.
    fn instantiate(&self, ty: TypeHash) -> Result<Dynamic, RuntimeError>;
}

/// A [`MetaMethod`] implemented by a Rust closure.
///
/// Static methods see their arguments starting at slot 0. Instance methods
/// see the receiver at slot 0 and their arguments from slot 1.
#[derive(Debug, Clone)]
pub struct NativeMethod {
    name: String,
    declaring_type: TypeHash,
    params: Vec<TypeHash>,
    modifiers: Modifiers,
    func: NativeFn,
}

impl NativeMethod {
    /// Create a free (static) function not attached to any type.
    pub fn function<F>(name: impl Into<String>, params: Vec<TypeHash>, f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        let name = name.into();
        let id = TypeHash::from_function(&name, &params);
        Self {
            name,
            declaring_type: TypeHash::EMPTY,
            params,
            modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
            func: NativeFn::new(id, f),
        }
    }

    /// Create a public instance method on `owner`.
    pub fn method<F>(owner: TypeHash, name: impl Into<String>, params: Vec<TypeHash>, f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        let name = name.into();
        let id = TypeHash::from_method(owner, &name, &params);
        Self {
            name,
            declaring_type: owner,
            params,
            modifiers: Modifiers::PUBLIC,
            func: NativeFn::new(id, f),
        }
    }

    /// Replace the modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the declaring type.
    pub fn with_declaring_type(mut self, ty: TypeHash) -> Self {
        self.declaring_type = ty;
        self
    }

    /// Identity of the underlying native function.
    pub fn id(&self) -> TypeHash {
        self.func.id
    }
}

impl MetaMethod for NativeMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeHash {
        self.declaring_type
    }

    fn parameter_types(&self) -> &[TypeHash] {
        &self.params
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn invoke(&self, receiver: Dynamic, args: Vec<Dynamic>) -> Result<Dynamic, RuntimeError> {
        if args.len() != self.params.len() {
            return Err(RuntimeError::ArityMismatch {
                method: self.name.clone(),
                expected: self.params.len(),
                got: args.len(),
            });
        }

        let (mut slots, arg_offset) = if self.is_static() {
            (args, 0)
        } else {
            let mut slots = Vec::with_capacity(args.len() + 1);
            slots.push(receiver);
            slots.extend(args);
            (slots, 1)
        };

        let mut ret = Dynamic::Void;
        let mut ctx = CallContext::new(&mut slots, arg_offset, &mut ret);
        self.func.call(&mut ctx)?;
        Ok(ret)
    }
}
