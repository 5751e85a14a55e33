//! Abstract Syntax Tree (AST) for Sable.
//!
//! All nodes are `Copy` and borrow from a [`bumpalo::Bump`] arena. Passes
//! that rewrite the tree allocate replacement nodes in the same arena and
//! return new values; existing nodes are never mutated.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use sable_ast::AstBuilder;
//! use sable_core::Span;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let class = b.class("Point", Span::default()).build();
//! assert_eq!(class.name.name, "Point");
//! ```

use std::fmt;

use sable_core::{Span, TypeHash};

pub mod decl;
pub mod expr;
pub mod stmt;

pub use decl::*;
pub use expr::*;
pub use stmt::*;

/// An identifier with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ident<'ast> {
    /// The identifier text
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    /// Create a new identifier.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A reference to a type by (possibly dotted) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeExpr<'ast> {
    /// Fully written type name, e.g. `sable.lang.MetaClass`
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

impl<'ast> TypeExpr<'ast> {
    /// Create a new type reference.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }

    /// The last path segment (`MetaClass` for `sable.lang.MetaClass`).
    pub fn simple_name(&self) -> &'ast str {
        self.name.rsplit('.').next().unwrap_or(self.name)
    }

    /// Hash identifying the named type.
    pub fn type_hash(&self) -> TypeHash {
        TypeHash::from_name(self.name)
    }
}

impl fmt::Display for TypeExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A script: the top-level items of one source unit.
///
/// The script borrows from an arena allocator. All AST nodes are allocated
/// in the arena and remain valid for the lifetime of the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Script<'ast> {
    items: &'ast [Item<'ast>],
    span: Span,
}

impl<'ast> Script<'ast> {
    /// Create a new script from items.
    pub fn new(items: &'ast [Item<'ast>], span: Span) -> Self {
        Self { items, span }
    }

    /// Items in declaration order.
    pub fn items(&self) -> &'ast [Item<'ast>] {
        self.items
    }

    /// Position of the whole script.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Every class in declaration order, including those inside namespaces.
    pub fn classes(&self) -> Vec<&'ast ClassDecl<'ast>> {
        fn collect<'ast>(items: &'ast [Item<'ast>], out: &mut Vec<&'ast ClassDecl<'ast>>) {
            for item in items {
                match item {
                    Item::Class(class) => out.push(class),
                    Item::Namespace(ns) => collect(ns.items, out),
                    Item::Function(_) => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(self.items, &mut out);
        out
    }
}
