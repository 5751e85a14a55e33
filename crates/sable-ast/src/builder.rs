//! Arena-backed construction helpers for AST nodes.
//!
//! Compiler passes and tests build nodes through [`AstBuilder`] so that
//! every string, slice and boxed node lands in the same arena as the tree it
//! joins.

use bumpalo::Bump;
use sable_core::{Modifiers, Span};

use crate::ast::*;

/// Allocates AST nodes in a [`Bump`] arena.
#[derive(Debug, Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder over `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    /// The underlying arena.
    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    /// Move a value into the arena.
    pub fn alloc<T>(&self, value: T) -> &'ast T {
        self.arena.alloc(value)
    }

    /// Copy a slice into the arena.
    pub fn slice<T: Copy>(&self, items: &[T]) -> &'ast [T] {
        self.arena.alloc_slice_copy(items)
    }

    /// Copy a string into the arena.
    pub fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    /// Create an identifier.
    pub fn ident(&self, name: &str, span: Span) -> Ident<'ast> {
        Ident::new(self.str(name), span)
    }

    /// Create a type reference.
    pub fn ty(&self, name: &str, span: Span) -> TypeExpr<'ast> {
        TypeExpr::new(self.str(name), span)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn literal(&self, kind: LiteralKind<'ast>, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::Literal(LiteralExpr { kind, span }))
    }

    /// Integer literal.
    pub fn int(&self, value: i64, span: Span) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Int(value), span)
    }

    /// Floating point literal.
    pub fn float(&self, value: f64, span: Span) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Float(value), span)
    }

    /// Boolean literal.
    pub fn bool(&self, value: bool, span: Span) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Bool(value), span)
    }

    /// String literal.
    pub fn string(&self, value: &str, span: Span) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::String(self.str(value)), span)
    }

    /// `null`.
    pub fn null(&self, span: Span) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Null, span)
    }

    /// Identifier reference.
    pub fn name(&self, name: &str, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::Ident(IdentExpr {
            ident: self.ident(name, span),
            span,
        }))
    }

    /// `this`.
    pub fn this(&self, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::This(ThisExpr { span }))
    }

    /// `this.name` for a field of the enclosing class.
    pub fn field(&self, name: &str, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::Field(FieldExpr {
            name: self.ident(name, span),
            span,
        }))
    }

    /// `object.member`.
    pub fn member(&self, object: &'ast Expr<'ast>, member: &str, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::Member(self.alloc(MemberExpr {
            object,
            member: self.ident(member, span),
            span,
        })))
    }

    /// `target = value`.
    pub fn assign(
        &self,
        target: &'ast Expr<'ast>,
        value: &'ast Expr<'ast>,
        span: Span,
    ) -> &'ast Expr<'ast> {
        self.alloc(Expr::Assign(self.alloc(AssignExpr {
            target,
            value,
            span,
        })))
    }

    /// `left op right`.
    pub fn binary(
        &self,
        left: &'ast Expr<'ast>,
        op: BinaryOp,
        right: &'ast Expr<'ast>,
        span: Span,
    ) -> &'ast Expr<'ast> {
        self.alloc(Expr::Binary(self.alloc(BinaryExpr {
            left,
            op,
            right,
            span,
        })))
    }

    /// `callee(args)`.
    pub fn call(
        &self,
        callee: &'ast Expr<'ast>,
        args: &[&'ast Expr<'ast>],
        span: Span,
    ) -> &'ast Expr<'ast> {
        self.alloc(Expr::Call(self.alloc(CallExpr {
            callee,
            args: self.slice(args),
            span,
        })))
    }

    /// `super(args)`.
    pub fn super_call(&self, args: &[&'ast Expr<'ast>], span: Span) -> &'ast Expr<'ast> {
        self.call(self.name("super", span), args, span)
    }

    /// `receiver.method(args)`.
    pub fn method_call(
        &self,
        receiver: &'ast Expr<'ast>,
        method: &str,
        args: &[&'ast Expr<'ast>],
        span: Span,
    ) -> &'ast Expr<'ast> {
        self.alloc(Expr::MethodCall(self.alloc(MethodCallExpr {
            receiver,
            method: self.ident(method, span),
            args: self.slice(args),
            span,
        })))
    }

    /// `Owner.method(args)`.
    pub fn static_call(
        &self,
        owner: &str,
        method: &str,
        args: &[&'ast Expr<'ast>],
        span: Span,
    ) -> &'ast Expr<'ast> {
        self.alloc(Expr::StaticCall(self.alloc(StaticCallExpr {
            owner: self.ty(owner, span),
            method: self.ident(method, span),
            args: self.slice(args),
            span,
        })))
    }

    /// `(expr)`.
    pub fn paren(&self, expr: &'ast Expr<'ast>, span: Span) -> &'ast Expr<'ast> {
        self.alloc(Expr::Paren(self.alloc(ParenExpr { expr, span })))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// `expr;`
    pub fn expr_stmt(&self, expr: &'ast Expr<'ast>, span: Span) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: Some(expr),
            span,
        })
    }

    /// `return value;`
    pub fn ret(&self, value: Option<&'ast Expr<'ast>>, span: Span) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt { value, span })
    }

    /// `{ stmts }`
    pub fn block(&self, stmts: &[Stmt<'ast>], span: Span) -> Stmt<'ast> {
        Stmt::Block(Block {
            stmts: self.slice(stmts),
            span,
        })
    }

    /// `Type name = init;`
    pub fn var_decl(
        &self,
        ty: &str,
        name: &str,
        init: Option<&'ast Expr<'ast>>,
        span: Span,
    ) -> Stmt<'ast> {
        Stmt::VarDecl(VarDeclStmt {
            ty: self.ty(ty, span),
            name: self.ident(name, span),
            init,
            span,
        })
    }

    /// `if (condition) then_stmt else else_stmt`
    pub fn if_stmt(
        &self,
        condition: &'ast Expr<'ast>,
        then_stmt: Stmt<'ast>,
        else_stmt: Option<Stmt<'ast>>,
        span: Span,
    ) -> Stmt<'ast> {
        Stmt::If(self.alloc(IfStmt {
            condition,
            then_stmt: self.alloc(then_stmt),
            else_stmt: else_stmt.map(|s| self.stmt(s)),
            span,
        }))
    }

    /// `this.name = value;`
    pub fn field_assign(&self, name: &str, value: &'ast Expr<'ast>, span: Span) -> Stmt<'ast> {
        self.expr_stmt(self.assign(self.field(name, span), value, span), span)
    }

    /// Move a statement into the arena, for use as a body.
    pub fn stmt(&self, stmt: Stmt<'ast>) -> &'ast Stmt<'ast> {
        self.alloc(stmt)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// A parameter.
    pub fn param(&self, name: &str, ty: &str, span: Span) -> Param<'ast> {
        Param {
            name: self.ident(name, span),
            ty: self.ty(ty, span),
            span,
        }
    }

    /// A declared field with no modifiers.
    pub fn field_decl(
        &self,
        name: &str,
        ty: &str,
        init: Option<&'ast Expr<'ast>>,
        span: Span,
    ) -> FieldDecl<'ast> {
        FieldDecl {
            name: self.ident(name, span),
            ty: self.ty(ty, span),
            modifiers: Modifiers::empty(),
            init,
            origin: MemberOrigin::Declared,
            span,
        }
    }

    /// A declared public constructor.
    pub fn constructor(
        &self,
        params: &[Param<'ast>],
        body: Option<Stmt<'ast>>,
        span: Span,
    ) -> ConstructorDecl<'ast> {
        ConstructorDecl {
            modifiers: Modifiers::PUBLIC,
            params: self.slice(params),
            body: body.map(|s| self.stmt(s)),
            origin: MemberOrigin::Declared,
            span,
        }
    }

    /// A declared public method.
    pub fn method(
        &self,
        name: &str,
        return_type: &str,
        params: &[Param<'ast>],
        body: Option<Stmt<'ast>>,
        span: Span,
    ) -> MethodDecl<'ast> {
        MethodDecl {
            name: self.ident(name, span),
            modifiers: Modifiers::PUBLIC,
            return_type: self.ty(return_type, span),
            params: self.slice(params),
            body: body.map(|s| self.stmt(s)),
            origin: MemberOrigin::Declared,
            span,
        }
    }

    /// A public free function.
    pub fn function(
        &self,
        name: &str,
        return_type: &str,
        params: &[Param<'ast>],
        body: Option<Stmt<'ast>>,
        span: Span,
    ) -> FunctionDecl<'ast> {
        FunctionDecl {
            name: self.ident(name, span),
            modifiers: Modifiers::PUBLIC,
            return_type: self.ty(return_type, span),
            params: self.slice(params),
            body: body.map(|s| self.stmt(s)),
            span,
        }
    }

    /// Start building a class.
    pub fn class(&self, name: &str, span: Span) -> ClassBuilder<'ast> {
        ClassBuilder {
            b: *self,
            name: self.ident(name, span),
            kind: ClassKind::Ordinary,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            span,
        }
    }

    /// A namespace `path` containing `items`.
    pub fn namespace(&self, path: &[&str], items: &[Item<'ast>], span: Span) -> Item<'ast> {
        let path: Vec<Ident<'ast>> = path.iter().map(|p| self.ident(p, span)).collect();
        Item::Namespace(NamespaceDecl {
            path: self.slice(&path),
            items: self.slice(items),
            span,
        })
    }

    /// A script of `items`.
    pub fn script(&self, items: &[Item<'ast>], span: Span) -> Script<'ast> {
        Script::new(self.slice(items), span)
    }
}

/// Incremental construction of a [`ClassDecl`].
#[derive(Debug, Clone)]
pub struct ClassBuilder<'ast> {
    b: AstBuilder<'ast>,
    name: Ident<'ast>,
    kind: ClassKind,
    superclass: Option<TypeExpr<'ast>>,
    interfaces: Vec<TypeExpr<'ast>>,
    fields: Vec<FieldDecl<'ast>>,
    constructors: Vec<ConstructorDecl<'ast>>,
    methods: Vec<MethodDecl<'ast>>,
    span: Span,
}

impl<'ast> ClassBuilder<'ast> {
    /// Set the nesting kind.
    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the superclass.
    pub fn extends(mut self, name: &str) -> Self {
        self.superclass = Some(self.b.ty(name, self.span));
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, name: &str) -> Self {
        self.interfaces.push(self.b.ty(name, self.span));
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDecl<'ast>) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a constructor.
    pub fn constructor(mut self, ctor: ConstructorDecl<'ast>) -> Self {
        self.constructors.push(ctor);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodDecl<'ast>) -> Self {
        self.methods.push(method);
        self
    }

    /// Finish the class, allocating member slices in the arena.
    pub fn build(self) -> ClassDecl<'ast> {
        ClassDecl {
            name: self.name,
            kind: self.kind,
            superclass: self.superclass,
            interfaces: self.b.slice(&self.interfaces),
            fields: self.b.slice(&self.fields),
            constructors: self.b.slice(&self.constructors),
            methods: self.b.slice(&self.methods),
            span: self.span,
        }
    }
}
