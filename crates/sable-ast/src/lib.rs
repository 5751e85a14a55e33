//! Arena-allocated syntax tree for Sable class declarations.
//!
//! The tree is produced by an external parser and consumed by the compiler
//! passes in `sable-compiler`. [`AstBuilder`] allocates nodes for passes that
//! synthesize new members and for tests.

pub mod ast;
mod builder;

pub use ast::*;
pub use builder::{AstBuilder, ClassBuilder};
