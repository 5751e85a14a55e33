//! Compiler passes.
//!
//! - [`synthesis`]: per-class synthesis of dispatch members
//! - [`script`]: runs synthesis over every class of a script

pub mod script;
pub mod synthesis;

pub use script::{SynthesisOutput, SynthesisPass};
pub use synthesis::{SynthesisReport, Synthesizer};
