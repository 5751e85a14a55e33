//! Declaration AST nodes.
//!
//! Provides nodes for top-level items and class members:
//! - Classes, with their fields, constructors and methods
//! - Free functions
//! - Namespaces

use crate::ast::expr::Expr;
use crate::ast::stmt::Stmt;
use crate::ast::{Ident, TypeExpr};
use sable_core::{Modifiers, Span};

/// Something declared at script or namespace level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'ast> {
    Class(ClassDecl<'ast>),
    /// Free function declaration
    Function(FunctionDecl<'ast>),
    Namespace(NamespaceDecl<'ast>),
}

impl<'ast> Item<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Class(d) => d.span,
            Self::Function(d) => d.span,
            Self::Namespace(d) => d.span,
        }
    }
}

/// `namespace a.b { items }`
///
/// Example: `namespace game.world { ... }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamespaceDecl<'ast> {
    /// Namespace path segments
    pub path: &'ast [Ident<'ast>],
    /// Items inside the namespace
    pub items: &'ast [Item<'ast>],
    pub span: Span,
}

/// A free function declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDecl<'ast> {
    pub name: Ident<'ast>,
    /// Declaration modifiers
    pub modifiers: Modifiers,
    pub return_type: TypeExpr<'ast>,
    pub params: &'ast [Param<'ast>],
    /// Body (None for declarations without implementation)
    pub body: Option<&'ast Stmt<'ast>>,
    pub span: Span,
}

/// How a class relates to its enclosing construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    /// A top-level class.
    #[default]
    Ordinary,
    /// A class declared inside another construct.
    Nested {
        /// What encloses the class.
        enclosing: EnclosingKind,
    },
}

impl ClassKind {
    /// Whether the class already receives dynamic dispatch from its
    /// enclosing construct.
    ///
    /// True only for classes nested in a closure: the closure base type
    /// provides `invokeMethod` itself.
    pub fn inherits_dispatch(self) -> bool {
        matches!(
            self,
            ClassKind::Nested {
                enclosing: EnclosingKind::Closure
            }
        )
    }
}

/// The construct enclosing a nested class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnclosingKind {
    /// A closure (deferred computation) body.
    Closure,
    /// A method or function body.
    Local,
    /// Another class, as a member.
    Member,
}

/// Where a member came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberOrigin {
    /// Written in source.
    #[default]
    Declared,
    /// Added by a compiler pass.
    Synthesized,
}

/// A parsed class, as synthesis receives and returns it.
///
/// Example:
/// ```text
/// class Point extends Shape implements Movable {
///     int x = 0
///     int y = 0
///     Point(int x) { super(); this.x = x }
///     int sum() { return x + y }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDecl<'ast> {
    pub name: Ident<'ast>,
    /// Nesting kind
    pub kind: ClassKind,
    /// Optional superclass
    pub superclass: Option<TypeExpr<'ast>>,
    /// Implemented interfaces, in declaration order
    pub interfaces: &'ast [TypeExpr<'ast>],
    /// Fields, in declaration order
    pub fields: &'ast [FieldDecl<'ast>],
    /// Constructors
    pub constructors: &'ast [ConstructorDecl<'ast>],
    /// Methods
    pub methods: &'ast [MethodDecl<'ast>],
    pub span: Span,
}

impl<'ast> ClassDecl<'ast> {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&'ast FieldDecl<'ast>> {
        self.fields.iter().find(|f| f.name.name == name)
    }

    /// Find a method by name and parameter count.
    pub fn method(&self, name: &str, arity: usize) -> Option<&'ast MethodDecl<'ast>> {
        self.methods
            .iter()
            .find(|m| m.name.name == name && m.params.len() == arity)
    }

    /// Check whether the class lists an interface by name.
    pub fn implements(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i.name == name)
    }

    /// Check if this class has any constructors.
    pub fn has_constructors(&self) -> bool {
        !self.constructors.is_empty()
    }
}

/// A field declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDecl<'ast> {
    pub name: Ident<'ast>,
    pub ty: TypeExpr<'ast>,
    /// Modifiers
    pub modifiers: Modifiers,
    pub init: Option<&'ast Expr<'ast>>,
    /// Declared in source or synthesized
    pub origin: MemberOrigin,
    pub span: Span,
}

impl<'ast> FieldDecl<'ast> {
    /// Whether a compiler pass added this field.
    pub fn is_synthesized(&self) -> bool {
        self.origin == MemberOrigin::Synthesized
    }
}

/// A constructor declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructorDecl<'ast> {
    /// Modifiers
    pub modifiers: Modifiers,
    pub params: &'ast [Param<'ast>],
    /// Body; a single statement, a block, or None for the default behaviour
    pub body: Option<&'ast Stmt<'ast>>,
    /// Declared in source or synthesized
    pub origin: MemberOrigin,
    pub span: Span,
}

/// A method declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodDecl<'ast> {
    pub name: Ident<'ast>,
    /// Modifiers
    pub modifiers: Modifiers,
    pub return_type: TypeExpr<'ast>,
    pub params: &'ast [Param<'ast>],
    /// Body (None for abstract methods)
    pub body: Option<&'ast Stmt<'ast>>,
    /// Declared in source or synthesized
    pub origin: MemberOrigin,
    pub span: Span,
}

impl<'ast> MethodDecl<'ast> {
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A function, method or constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    /// Parameter name
    pub name: Ident<'ast>,
    pub ty: TypeExpr<'ast>,
    pub span: Span,
}
