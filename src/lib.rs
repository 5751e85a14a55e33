//! Sable: class synthesis and extension-method dispatch.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: spans, hashes, errors and runtime method reflection
//! - [`ast`]: the arena-allocated declaration tree
//! - [`compiler`]: the class synthesis pass
//! - [`registry`]: meta classes and extension method registration
//!
//! # Example
//!
//! ```
//! use sable::prelude::*;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let span = Span::default();
//!
//! let point = b
//!     .class("Point", span)
//!     .field(b.field_decl("x", "int", Some(b.int(0, span)), span))
//!     .build();
//! let script = b.script(&[Item::Class(point)], span);
//!
//! let output = sable::synthesize(&arena, &script);
//! assert!(output.is_success());
//! assert_eq!(output.classes_synthesized, 1);
//! ```

pub use bumpalo;
pub use sable_ast as ast;
pub use sable_compiler as compiler;
pub use sable_core as core;
pub use sable_registry as registry;

use bumpalo::Bump;
use sable_ast::{AstBuilder, Script};
use sable_compiler::{RuntimeMetadata, SynthesisConfig, SynthesisOutput, SynthesisPass};

/// Run class synthesis over `script` with the default configuration.
///
/// New nodes are allocated in `arena`, which must be the arena the script
/// lives in (or outlive it).
pub fn synthesize<'ast>(arena: &'ast Bump, script: &Script<'ast>) -> SynthesisOutput<'ast> {
    let builder = AstBuilder::new(arena);
    let provider = RuntimeMetadata::default();
    SynthesisPass::new(&builder, &provider, SynthesisConfig::default()).run(script)
}

/// Commonly used types.
pub mod prelude {
    pub use bumpalo::Bump;
    pub use sable_ast::{AstBuilder, ClassDecl, ClassKind, EnclosingKind, Item, Script, Stmt};
    pub use sable_compiler::{
        CollisionPolicy, MetadataProvider, RuntimeMetadata, SynthesisConfig, SynthesisOutput,
        SynthesisPass, Synthesizer,
    };
    pub use sable_core::{
        CallContext, CompilationError, Dynamic, ExtensionMethod, InstanceFactory, MetaMethod,
        Modifiers, NativeError, NativeMethod, RuntimeError, SableError, Span, TypeHash,
    };
    pub use sable_registry::{Instance, MetaClass, MetaClassRegistry};
}
