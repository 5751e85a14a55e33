//! Rust closures callable as method bodies.

use std::fmt;
use std::sync::Arc;

use crate::TypeHash;
use crate::native_error::NativeError;

use super::CallContext;

/// A shared, type-erased method body tagged with the hash of the method it
/// implements.
///
/// Cloning shares the body.
pub struct NativeFn {
    pub id: TypeHash,
    body: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    pub fn new<F>(id: TypeHash, body: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self {
            id,
            body: Arc::new(body),
        }
    }

    /// Run the body against the slots in `ctx`.
    pub fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError> {
        self.body.call(ctx)
    }
}

impl Clone for NativeFn {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            body: Arc::clone(&self.body),
        }
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A method body: reads its arguments from a [`CallContext`] and writes its
/// result to the context's return slot.
///
/// Implemented for every `Fn(&mut CallContext) -> Result<(), NativeError>`.
pub trait NativeCallable {
    fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError>;
}

impl<F> NativeCallable for F
where
    F: Fn(&mut CallContext) -> Result<(), NativeError>,
{
    fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError> {
        self(ctx)
    }
}
