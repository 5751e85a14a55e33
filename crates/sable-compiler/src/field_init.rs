//! Field initialization for class constructors.
//!
//! Declared field initializers run as part of every constructor, in field
//! declaration order, right after an explicit `super(...)` call if the
//! constructor starts with one:
//!
//! ```text
//! class Point { int x = 0; int y = 0; Point() { super(); log("made") } }
//!
//! Point() {
//!     super();        // stays first
//!     this.x = 0;     // initializers, declaration order
//!     this.y = 0;
//!     log("made");    // original statements
//! }
//! ```
//!
//! Synthesized fields are skipped: their initializers are emitted at the
//! declaration by code generation.

use sable_ast::{AstBuilder, ClassDecl, ConstructorDecl, Expr, ExprStmt, Ident, Stmt};
use sable_core::Span;

/// A declared field initializer to be run by constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInit<'ast> {
    /// Field being initialized.
    pub name: Ident<'ast>,
    /// Initializer expression.
    pub init: &'ast Expr<'ast>,
    /// Source span of the field declaration.
    pub span: Span,
}

/// Collect initializers of declared fields, in declaration order.
pub fn collect_field_inits<'ast>(class: &ClassDecl<'ast>) -> Vec<FieldInit<'ast>> {
    class
        .fields
        .iter()
        .filter(|field| !field.is_synthesized())
        .filter_map(|field| {
            field.init.map(|init| FieldInit {
                name: field.name,
                init,
                span: field.span,
            })
        })
        .collect()
}

/// View a constructor body as a statement list.
///
/// No body yields an empty list, a block yields its statements, and any
/// other statement yields a one-element list.
pub fn body_statements<'ast>(body: Option<&'ast Stmt<'ast>>) -> &'ast [Stmt<'ast>] {
    match body {
        None => &[],
        Some(Stmt::Block(block)) => block.stmts,
        Some(stmt) => std::slice::from_ref(stmt),
    }
}

/// Split a body into its leading `super(...)` call, if any, and the rest.
fn split_super_call<'a, 'ast>(stmts: &'a [Stmt<'ast>]) -> (&'a [Stmt<'ast>], &'a [Stmt<'ast>]) {
    let split = usize::from(stmts.first().is_some_and(Stmt::is_super_call));
    stmts.split_at(split)
}

/// The field and value of a `this.field = value;` statement.
pub fn field_assignment<'ast>(stmt: &Stmt<'ast>) -> Option<(&'ast str, &'ast Expr<'ast>)> {
    match stmt {
        Stmt::Expr(ExprStmt {
            expr: Some(Expr::Assign(assign)),
            ..
        }) => match assign.target {
            Expr::Field(field) => Some((field.name.name, assign.value)),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `ctor` already runs `inits`: right after an optional leading
/// `super(...)` call, its body assigns each field its initializer, in order.
pub fn runs_field_inits(ctor: &ConstructorDecl<'_>, inits: &[FieldInit<'_>]) -> bool {
    let (_, rest) = split_super_call(body_statements(ctor.body));
    rest.len() >= inits.len()
        && inits.iter().zip(rest).all(|(fi, stmt)| {
            field_assignment(stmt)
                .is_some_and(|(name, value)| name == fi.name.name && value == fi.init)
        })
}

/// Prepend field initializer assignments to a constructor body.
///
/// A leading `super(...)` call stays first. Returns the constructor
/// unchanged when `inits` is empty or the body already starts with them.
pub fn inject_field_inits<'ast>(
    builder: &AstBuilder<'ast>,
    ctor: &ConstructorDecl<'ast>,
    inits: &[FieldInit<'ast>],
) -> ConstructorDecl<'ast> {
    if inits.is_empty() || runs_field_inits(ctor, inits) {
        return *ctor;
    }

    let original = body_statements(ctor.body);
    let (head, rest) = split_super_call(original);

    let mut stmts = Vec::with_capacity(original.len() + inits.len());
    stmts.extend_from_slice(head);
    stmts.extend(
        inits
            .iter()
            .map(|fi| builder.field_assign(fi.name.name, fi.init, fi.span)),
    );
    stmts.extend_from_slice(rest);

    let span = ctor.body.map_or(ctor.span, |body| body.span());
    ConstructorDecl {
        body: Some(builder.stmt(builder.block(&stmts, span))),
        ..*ctor
    }
}
