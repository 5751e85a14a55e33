//! Sable runtime registry.
//!
//! Holds the runtime side of dynamic dispatch: every registered type has a
//! [`MetaClass`] that resolves and invokes methods by name, and receiver-first
//! functions can be attached to a type as extension methods.

mod instance;
mod meta_class;
mod registry;

pub use instance::Instance;
pub use meta_class::MetaClass;
pub use registry::MetaClassRegistry;
