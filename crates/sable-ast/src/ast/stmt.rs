//! Statements that can appear in constructor and method bodies.

use crate::ast::Ident;
use crate::ast::TypeExpr;
use crate::ast::expr::Expr;
use sable_core::Span;

/// A statement in a body. Only the forms synthesis generates or inspects
/// are modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    Expr(ExprStmt<'ast>),
    Return(ReturnStmt<'ast>),
    Block(Block<'ast>),
    VarDecl(VarDeclStmt<'ast>),
    If(&'ast IfStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::Return(s) => s.span,
            Self::Block(s) => s.span,
            Self::VarDecl(s) => s.span,
            Self::If(s) => s.span,
        }
    }

    /// Whether this is an expression statement calling `super(...)`.
    pub fn is_super_call(&self) -> bool {
        match self {
            Self::Expr(ExprStmt {
                expr: Some(expr), ..
            }) => expr.is_super_call(),
            _ => false,
        }
    }
}

/// `expr;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    /// `None` for a bare `;`.
    pub expr: Option<&'ast Expr<'ast>>,
    pub span: Span,
}

/// `return;` or `return value;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub value: Option<&'ast Expr<'ast>>,
    pub span: Span,
}

/// `{ stmts }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub span: Span,
}

/// `Type name = init;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclStmt<'ast> {
    pub ty: TypeExpr<'ast>,
    pub name: Ident<'ast>,
    pub init: Option<&'ast Expr<'ast>>,
    pub span: Span,
}

/// `if (condition) then_stmt else else_stmt`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_stmt: &'ast Stmt<'ast>,
    pub else_stmt: Option<&'ast Stmt<'ast>>,
    pub span: Span,
}
