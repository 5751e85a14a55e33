//! Runtime values and callable methods.
//!
//! - [`Dynamic`]: a value held in an argument or return slot
//! - [`NativeFn`] / [`CallContext`]: type-erased Rust callables and their arguments
//! - [`MetaMethod`]: reflection and invocation interface of a method
//! - [`ExtensionMethod`]: a receiver-first function viewed as an instance method

mod call_context;
mod convert;
mod dynamic;
mod extension;
mod meta_method;
mod native_fn;

pub use call_context::CallContext;
pub use convert::{FromDynamic, IntoDynamic};
pub use dynamic::Dynamic;
pub use extension::ExtensionMethod;
pub use meta_method::{InstanceFactory, MetaMethod, NativeMethod};
pub use native_fn::{NativeCallable, NativeFn};
