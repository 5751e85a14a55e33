//! Core types shared by the Sable compiler and runtime crates.
//!
//! This crate holds the pieces every other crate depends on:
//!
//! - [`Span`]: source locations carried by AST nodes and diagnostics
//! - [`TypeHash`]: deterministic identity for types and methods
//! - [`Modifiers`]: access and dispatch flags on members
//! - [`error`]: the per-phase error hierarchy
//! - [`runtime`]: dynamic values, native callables and method reflection

pub mod error;
pub mod modifiers;
pub mod native_error;
pub mod runtime;
pub mod span;
pub mod type_hash;

pub use error::{CompilationError, RegistrationError, RuntimeError, SableError};
pub use modifiers::Modifiers;
pub use native_error::NativeError;
pub use runtime::{
    CallContext, Dynamic, ExtensionMethod, FromDynamic, InstanceFactory, IntoDynamic, MetaMethod,
    NativeCallable, NativeFn, NativeMethod,
};
pub use span::Span;
pub use type_hash::{TypeHash, builtins};
