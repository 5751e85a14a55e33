//! Sable front-end passes.
//!
//! Runs between the parser and code generation and rewrites class
//! declarations so every instance supports invoke-by-name dispatch.
//!
//! ## Modules
//!
//! - [`config`]: names and collision policy used by synthesis
//! - [`metadata`]: where the per-instance dispatch metadata comes from
//! - [`field_init`]: moving field initializers into constructors
//! - [`passes`]: the per-class synthesizer and the script-level pass

pub mod config;
pub mod field_init;
pub mod metadata;
pub mod passes;

pub use config::{CollisionPolicy, SynthesisConfig};
pub use metadata::{MetadataProvider, RuntimeMetadata};
pub use passes::{SynthesisOutput, SynthesisPass, SynthesisReport, Synthesizer};

// Re-export CompilationError from core for convenience
pub use sable_core::CompilationError;
