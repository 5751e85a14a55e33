//! Expressions.
//!
//! Covers what class synthesis emits (field assignments, runtime helper
//! calls, forwarding calls) and what constructor bodies commonly contain.

use crate::ast::Ident;
use crate::ast::TypeExpr;
use sable_core::Span;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    Literal(LiteralExpr<'ast>),
    /// A bare name: a local, a parameter, or `super` as a callee
    Ident(IdentExpr<'ast>),
    /// The current instance (`this`)
    This(ThisExpr),
    /// A field of the enclosing class (`this.name`)
    Field(FieldExpr<'ast>),
    /// Member access on an arbitrary object (`obj.name`)
    Member(&'ast MemberExpr<'ast>),
    Assign(&'ast AssignExpr<'ast>),
    Binary(&'ast BinaryExpr<'ast>),
    /// Call of an arbitrary callee
    Call(&'ast CallExpr<'ast>),
    /// Method call on a receiver (`recv.name(args)`)
    MethodCall(&'ast MethodCallExpr<'ast>),
    /// Static call on a named type (`Owner.name(args)`)
    StaticCall(&'ast StaticCallExpr<'ast>),
    Paren(&'ast ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Ident(e) => e.span,
            Self::This(e) => e.span,
            Self::Field(e) => e.span,
            Self::Member(e) => e.span,
            Self::Assign(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Call(e) => e.span,
            Self::MethodCall(e) => e.span,
            Self::StaticCall(e) => e.span,
            Self::Paren(e) => e.span,
        }
    }

    /// Whether this is a call of the form `super(...)`.
    pub fn is_super_call(&self) -> bool {
        match self {
            Self::Call(call) => {
                matches!(call.callee, Expr::Ident(ident) if ident.ident.name == "super")
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub kind: LiteralKind<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(&'ast str),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentExpr<'ast> {
    pub ident: Ident<'ast>,
    pub span: Span,
}

/// The `this` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThisExpr {
    pub span: Span,
}

/// A reference to a field of the enclosing class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldExpr<'ast> {
    pub name: Ident<'ast>,
    pub span: Span,
}

/// Member access on an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub member: Ident<'ast>,
    pub span: Span,
}

/// An assignment expression (`target = value`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    pub target: &'ast Expr<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub left: &'ast Expr<'ast>,
    pub op: BinaryOp,
    pub right: &'ast Expr<'ast>,
    pub span: Span,
}

/// A call of an arbitrary callee, including `super(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub callee: &'ast Expr<'ast>,
    pub args: &'ast [&'ast Expr<'ast>],
    pub span: Span,
}

/// A method call on a receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodCallExpr<'ast> {
    pub receiver: &'ast Expr<'ast>,
    pub method: Ident<'ast>,
    pub args: &'ast [&'ast Expr<'ast>],
    pub span: Span,
}

/// A call of a static method on a named type.
///
/// Synthesized code uses this to reach runtime helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCallExpr<'ast> {
    /// Type the method is declared on.
    pub owner: TypeExpr<'ast>,
    pub method: Ident<'ast>,
    pub args: &'ast [&'ast Expr<'ast>],
    pub span: Span,
}

/// `(expr)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    pub expr: &'ast Expr<'ast>,
    pub span: Span,
}
