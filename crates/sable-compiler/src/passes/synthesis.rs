//! Class synthesis - make a class usable through dynamic dispatch.
//!
//! Every class leaving this pass:
//!
//! - implements the marker interface
//! - carries a public final metadata field, initialized by the runtime lookup
//! - has a generic dispatch method forwarding to that metadata
//!   (unless its enclosing closure already supplies one)
//! - has at least one constructor
//! - exposes the metadata through an accessor
//! - runs its declared field initializers in every constructor
//!
//! ## Steps
//!
//! ```text
//! ClassDecl ──► tag interface ──► metadata field ──► dispatch method
//!                                                         │
//!   ClassDecl ◄── field inits ◄── accessor ◄── default constructor
//! ```
//!
//! The input declaration is never modified. New member slices are allocated
//! in the builder's arena and returned in a fresh [`ClassDecl`].

use rustc_hash::FxHashSet;
use sable_ast::{
    AstBuilder, ClassDecl, ConstructorDecl, FieldDecl, MemberOrigin, MethodDecl, TypeExpr,
};
use sable_core::{CompilationError, Modifiers, Span};
use tracing::debug;

use crate::config::{CollisionPolicy, SynthesisConfig};
use crate::field_init::{collect_field_inits, inject_field_inits, runs_field_inits};
use crate::metadata::MetadataProvider;

type Result<T> = std::result::Result<T, CompilationError>;

/// What a single synthesis run changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisReport {
    /// The marker interface was appended.
    pub interface_added: bool,
    /// The metadata field was appended.
    pub field_injected: bool,
    /// Number of methods appended.
    pub methods_injected: usize,
    /// A default constructor was appended.
    pub constructor_added: bool,
    /// Number of constructors whose bodies were rewritten.
    pub constructors_rewritten: usize,
}

/// Synthesizes dispatch members for one class at a time.
pub struct Synthesizer<'a, 'ast> {
    builder: AstBuilder<'ast>,
    provider: &'a dyn MetadataProvider,
    config: SynthesisConfig,
}

impl<'a, 'ast> Synthesizer<'a, 'ast> {
    /// Create a synthesizer allocating into `builder`'s arena.
    pub fn new(
        builder: &AstBuilder<'ast>,
        provider: &'a dyn MetadataProvider,
        config: SynthesisConfig,
    ) -> Self {
        Self {
            builder: *builder,
            provider,
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize dispatch members for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`CompilationError::DuplicateDefinition`] when the class
    /// declares a field twice, or when a synthesized member collides with a
    /// declared one under [`CollisionPolicy::Error`].
    pub fn synthesize(&self, class: &ClassDecl<'ast>) -> Result<ClassDecl<'ast>> {
        self.synthesize_with_report(class).map(|(class, _)| class)
    }

    /// Like [`synthesize`](Self::synthesize), also reporting what changed.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn synthesize_with_report(
        &self,
        class: &ClassDecl<'ast>,
    ) -> Result<(ClassDecl<'ast>, SynthesisReport)> {
        check_unique_fields(class)?;

        let mut report = SynthesisReport::default();
        let span = class.span.start();

        let interfaces = self.tag_interface(class, span, &mut report);
        let (fields, metadata_ty) = self.inject_metadata_field(class, span, &mut report)?;

        let mut methods = class.methods.to_vec();
        if class.kind.inherits_dispatch() {
            debug!(class = %class.name, "closure supplies dispatch, skipping dispatch method");
        } else {
            let dispatch = self.dispatch_method(span);
            self.add_method(class, &mut methods, dispatch, &mut report)?;
        }

        let mut constructors = class.constructors.to_vec();
        if constructors.is_empty() {
            debug!(class = %class.name, "adding default constructor");
            constructors.push(self.default_constructor(span));
            report.constructor_added = true;
        }

        let accessor = self.metadata_accessor(metadata_ty, span);
        self.add_method(class, &mut methods, accessor, &mut report)?;

        let inits = collect_field_inits(class);
        if !inits.is_empty() {
            for ctor in constructors.iter_mut() {
                if runs_field_inits(ctor, &inits) {
                    continue;
                }
                *ctor = inject_field_inits(&self.builder, ctor, &inits);
                report.constructors_rewritten += 1;
            }
            debug!(
                class = %class.name,
                fields = inits.len(),
                rewritten = report.constructors_rewritten,
                "propagated field initializers"
            );
        }

        let b = &self.builder;
        let synthesized = ClassDecl {
            interfaces,
            fields,
            constructors: b.slice(&constructors),
            methods: b.slice(&methods),
            ..*class
        };
        Ok((synthesized, report))
    }

    // ==========================================================================
    // Steps
    // ==========================================================================

    fn tag_interface(
        &self,
        class: &ClassDecl<'ast>,
        span: Span,
        report: &mut SynthesisReport,
    ) -> &'ast [TypeExpr<'ast>] {
        if class.implements(&self.config.marker_interface) {
            return class.interfaces;
        }

        let mut interfaces = class.interfaces.to_vec();
        interfaces.push(self.builder.ty(&self.config.marker_interface, span));
        report.interface_added = true;
        debug!(class = %class.name, interface = %self.config.marker_interface, "tagged class");
        self.builder.slice(&interfaces)
    }

    /// Returns the new field list and the metadata field's type.
    fn inject_metadata_field(
        &self,
        class: &ClassDecl<'ast>,
        span: Span,
        report: &mut SynthesisReport,
    ) -> Result<(&'ast [FieldDecl<'ast>], TypeExpr<'ast>)> {
        let name = &self.config.metadata_field;

        if let Some(existing) = class.field(name) {
            if !existing.is_synthesized()
                && self.config.collision_policy == CollisionPolicy::Error
            {
                return Err(CompilationError::duplicate(name.as_str(), existing.span));
            }
            debug!(class = %class.name, field = %name, "reusing existing metadata field");
            return Ok((class.fields, existing.ty));
        }

        let b = &self.builder;
        let field = FieldDecl {
            name: b.ident(name, span),
            ty: b.ty(self.provider.metadata_type(), span),
            modifiers: Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::SYNTHETIC,
            init: Some(self.provider.lookup(b, b.this(span), span)),
            origin: MemberOrigin::Synthesized,
            span,
        };

        let mut fields = class.fields.to_vec();
        fields.push(field);
        report.field_injected = true;
        debug!(class = %class.name, field = %name, "injected metadata field");
        Ok((b.slice(&fields), field.ty))
    }

    /// `public Object invokeMethod(String name, Object arguments)`
    /// forwarding to `this.metaClass.invokeMethod(this, name, arguments)`.
    fn dispatch_method(&self, span: Span) -> MethodDecl<'ast> {
        let b = &self.builder;
        let cfg = &self.config;

        let forward = b.method_call(
            b.field(&cfg.metadata_field, span),
            &cfg.dispatch_method,
            &[b.this(span), b.name("name", span), b.name("arguments", span)],
            span,
        );
        let body = b.block(&[b.ret(Some(forward), span)], span);

        MethodDecl {
            name: b.ident(&cfg.dispatch_method, span),
            modifiers: Modifiers::PUBLIC | Modifiers::SYNTHETIC,
            return_type: b.ty(&cfg.object_type, span),
            params: b.slice(&[
                b.param("name", &cfg.string_type, span),
                b.param("arguments", &cfg.object_type, span),
            ]),
            body: Some(b.stmt(body)),
            origin: MemberOrigin::Synthesized,
            span,
        }
    }

    fn default_constructor(&self, span: Span) -> ConstructorDecl<'ast> {
        ConstructorDecl {
            modifiers: Modifiers::PUBLIC | Modifiers::SYNTHETIC,
            params: &[],
            body: None,
            origin: MemberOrigin::Synthesized,
            span,
        }
    }

    /// `public MetaClass getMetaClass() { return this.metaClass; }`
    fn metadata_accessor(&self, metadata_ty: TypeExpr<'ast>, span: Span) -> MethodDecl<'ast> {
        let b = &self.builder;
        let body = b.block(
            &[b.ret(Some(b.field(&self.config.metadata_field, span)), span)],
            span,
        );

        MethodDecl {
            name: b.ident(&self.config.metadata_accessor, span),
            modifiers: Modifiers::PUBLIC | Modifiers::SYNTHETIC,
            return_type: metadata_ty,
            params: &[],
            body: Some(b.stmt(body)),
            origin: MemberOrigin::Synthesized,
            span,
        }
    }

    /// Append `candidate` unless a method with the same name and arity exists.
    fn add_method(
        &self,
        class: &ClassDecl<'ast>,
        methods: &mut Vec<MethodDecl<'ast>>,
        candidate: MethodDecl<'ast>,
        report: &mut SynthesisReport,
    ) -> Result<()> {
        let name = candidate.name.name;
        let existing = methods
            .iter()
            .find(|m| m.name.name == name && m.arity() == candidate.arity());

        match existing {
            Some(m) if m.origin == MemberOrigin::Synthesized => {
                debug!(class = %class.name, method = name, "method already synthesized");
            }
            Some(m) => match self.config.collision_policy {
                CollisionPolicy::Skip => {
                    debug!(class = %class.name, method = name, "keeping declared method");
                }
                CollisionPolicy::Error => {
                    return Err(CompilationError::duplicate(name, m.span));
                }
            },
            None => {
                debug!(class = %class.name, method = name, "injected method");
                methods.push(candidate);
                report.methods_injected += 1;
            }
        }

        Ok(())
    }
}

/// Reject classes that declare the same field name twice.
fn check_unique_fields(class: &ClassDecl<'_>) -> Result<()> {
    let mut seen = FxHashSet::default();
    for field in class.fields {
        if !seen.insert(field.name.name) {
            return Err(CompilationError::duplicate(field.name.name, field.span));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_init::{body_statements, field_assignment};
    use crate::metadata::RuntimeMetadata;
    use bumpalo::Bump;
    use sable_ast::{ClassKind, EnclosingKind, Expr, LiteralKind, ReturnStmt, Stmt};

    fn span() -> Span {
        Span::default()
    }

    fn synth<'ast>(b: &AstBuilder<'ast>, class: &ClassDecl<'ast>) -> Result<ClassDecl<'ast>> {
        let provider = RuntimeMetadata::default();
        Synthesizer::new(b, &provider, SynthesisConfig::default()).synthesize(class)
    }

    fn strict<'ast>(b: &AstBuilder<'ast>, class: &ClassDecl<'ast>) -> Result<ClassDecl<'ast>> {
        let provider = RuntimeMetadata::default();
        let config = SynthesisConfig::default().with_collision_policy(CollisionPolicy::Error);
        Synthesizer::new(b, &provider, config).synthesize(class)
    }

    fn method_names<'ast>(class: &ClassDecl<'ast>) -> Vec<&'ast str> {
        class.methods.iter().map(|m| m.name.name).collect()
    }

    fn count_interface(class: &ClassDecl<'_>, name: &str) -> usize {
        class.interfaces.iter().filter(|i| i.name == name).count()
    }

    fn assigned_field<'a>(stmt: &Stmt<'a>) -> Option<&'a str> {
        field_assignment(stmt).map(|(name, _)| name)
    }

    fn point<'ast>(b: &AstBuilder<'ast>) -> ClassDecl<'ast> {
        b.class("Point", span())
            .field(b.field_decl("x", "int", Some(b.int(0, span())), span()))
            .field(b.field_decl("y", "int", Some(b.int(0, span())), span()))
            .build()
    }

    // =========================================================================
    // Interface tagging
    // =========================================================================

    #[test]
    fn adds_marker_interface_once() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b.class("A", span()).implements("Comparable").build();

        let out = synth(&b, &class).unwrap();
        let names: Vec<_> = out.interfaces.iter().map(|i| i.name).collect();
        assert_eq!(names, ["Comparable", "sable.lang.DynamicObject"]);
    }

    #[test]
    fn marker_interface_already_present_is_unchanged() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b
            .class("A", span())
            .implements("sable.lang.DynamicObject")
            .build();

        let out = synth(&b, &class).unwrap();
        assert_eq!(count_interface(&out, "sable.lang.DynamicObject"), 1);
        assert!(std::ptr::eq(out.interfaces, class.interfaces));
    }

    // =========================================================================
    // Metadata field
    // =========================================================================

    #[test]
    fn injects_metadata_field() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let out = synth(&b, &b.class("A", span()).build()).unwrap();

        let field = out.field("metaClass").expect("metadata field");
        assert_eq!(field.ty.name, "sable.lang.MetaClass");
        assert_eq!(
            field.modifiers,
            Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::SYNTHETIC
        );
        assert!(field.is_synthesized());

        let Some(Expr::StaticCall(call)) = field.init else {
            panic!("expected lookup call, got {:?}", field.init);
        };
        assert_eq!(call.method.name, "metaClassOf");
        assert!(matches!(call.args, [Expr::This(_)]));
    }

    #[test]
    fn declared_metadata_field_reused_under_skip() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b
            .class("A", span())
            .field(b.field_decl("metaClass", "custom.Meta", None, span()))
            .build();

        let out = synth(&b, &class).unwrap();
        assert_eq!(out.fields.len(), 1);
        let accessor = out.method("getMetaClass", 0).expect("accessor");
        assert_eq!(accessor.return_type.name, "custom.Meta");
    }

    #[test]
    fn declared_metadata_field_errors_under_error_policy() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let field_span = Span::new(2, 5, 9);
        let class = b
            .class("A", span())
            .field(b.field_decl("metaClass", "custom.Meta", None, field_span))
            .build();

        let err = strict(&b, &class).unwrap_err();
        assert_eq!(err, CompilationError::duplicate("metaClass", field_span));
    }

    // =========================================================================
    // Dispatch method
    // =========================================================================

    #[test]
    fn dispatch_method_forwards_to_metadata() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let out = synth(&b, &b.class("A", span()).build()).unwrap();

        let m = out.method("invokeMethod", 2).expect("dispatch method");
        assert_eq!(m.return_type.name, "Object");
        assert_eq!(m.params[0].name.name, "name");
        assert_eq!(m.params[0].ty.name, "String");
        assert_eq!(m.params[1].name.name, "arguments");
        assert_eq!(m.params[1].ty.name, "Object");
        assert!(m.modifiers.is_public());

        let stmts = body_statements(m.body);
        let [Stmt::Return(ReturnStmt {
            value: Some(Expr::MethodCall(call)),
            ..
        })] = stmts
        else {
            panic!("expected single forwarding return, got {stmts:?}");
        };
        assert!(matches!(call.receiver, Expr::Field(f) if f.name.name == "metaClass"));
        assert_eq!(call.method.name, "invokeMethod");
        assert!(matches!(
            call.args,
            [Expr::This(_), Expr::Ident(n), Expr::Ident(a)]
                if n.ident.name == "name" && a.ident.name == "arguments"
        ));
    }

    #[test]
    fn closure_nested_class_skips_dispatch_method() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b
            .class("Inner", span())
            .kind(ClassKind::Nested {
                enclosing: EnclosingKind::Closure,
            })
            .build();

        let out = synth(&b, &class).unwrap();
        assert!(out.method("invokeMethod", 2).is_none());
        assert!(out.field("metaClass").is_some());
        assert!(out.method("getMetaClass", 0).is_some());
    }

    #[test]
    fn other_nested_classes_get_dispatch_method() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        for enclosing in [EnclosingKind::Local, EnclosingKind::Member] {
            let class = b
                .class("Inner", span())
                .kind(ClassKind::Nested { enclosing })
                .build();
            let out = synth(&b, &class).unwrap();
            assert!(out.method("invokeMethod", 2).is_some(), "{enclosing:?}");
        }
    }

    // =========================================================================
    // Collisions
    // =========================================================================

    fn with_user_dispatch<'ast>(b: &AstBuilder<'ast>, method_span: Span) -> ClassDecl<'ast> {
        let user = b.method(
            "invokeMethod",
            "Object",
            &[b.param("n", "String", span()), b.param("a", "Object", span())],
            Some(b.block(&[b.ret(Some(b.null(span())), span())], span())),
            method_span,
        );
        b.class("A", span()).method(user).build()
    }

    #[test]
    fn skip_policy_keeps_user_method() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = with_user_dispatch(&b, span());

        let out = synth(&b, &class).unwrap();
        assert_eq!(method_names(&out), ["invokeMethod", "getMetaClass"]);
        assert_eq!(out.methods[0], class.methods[0]);
    }

    #[test]
    fn error_policy_reports_duplicate() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let method_span = Span::new(7, 3, 12);
        let class = with_user_dispatch(&b, method_span);

        let err = strict(&b, &class).unwrap_err();
        assert_eq!(err, CompilationError::duplicate("invokeMethod", method_span));
    }

    #[test]
    fn overload_with_different_arity_is_not_a_collision() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let overload = b.method(
            "getMetaClass",
            "Object",
            &[b.param("which", "int", span())],
            None,
            span(),
        );
        let class = b.class("A", span()).method(overload).build();

        let out = strict(&b, &class).unwrap();
        assert!(out.method("getMetaClass", 1).is_some());
        assert!(out.method("getMetaClass", 0).is_some());
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let second = Span::new(3, 1, 5);
        let class = b
            .class("A", span())
            .field(b.field_decl("x", "int", None, span()))
            .field(b.field_decl("x", "int", None, second))
            .build();

        let err = synth(&b, &class).unwrap_err();
        assert_eq!(err, CompilationError::duplicate("x", second));
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    #[test]
    fn zero_constructors_get_one_default() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let out = synth(&b, &b.class("A", span()).build()).unwrap();

        assert_eq!(out.constructors.len(), 1);
        let ctor = out.constructors[0];
        assert!(ctor.params.is_empty());
        assert!(ctor.modifiers.is_public());
        assert!(ctor.body.is_none());
    }

    #[test]
    fn declared_constructors_are_kept() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctor = b.constructor(&[b.param("x", "int", span())], None, span());
        let class = b.class("A", span()).constructor(ctor).build();

        let out = synth(&b, &class).unwrap();
        assert_eq!(out.constructors, &[ctor]);
    }

    #[test]
    fn point_default_constructor_assigns_fields() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = point(&b);
        let out = synth(&b, &class).unwrap();

        assert_eq!(out.constructors.len(), 1);
        let stmts = body_statements(out.constructors[0].body);
        assert_eq!(stmts.len(), 2);
        for (stmt, field) in stmts.iter().zip(class.fields) {
            let (name, value) = field_assignment(stmt).expect("field assignment");
            assert_eq!(name, field.name.name);
            assert!(std::ptr::eq(value, field.init.unwrap()));
            assert!(matches!(value, Expr::Literal(lit) if lit.kind == LiteralKind::Int(0)));
        }
    }

    #[test]
    fn every_constructor_is_rewritten() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let super_stmt = b.expr_stmt(b.super_call(&[], span()), span());
        let body_stmt = b.expr_stmt(b.name("work", span()), span());
        let class = b
            .class("P", span())
            .field(b.field_decl("x", "int", Some(b.int(1, span())), span()))
            .field(b.field_decl("y", "int", None, span()))
            .constructor(b.constructor(
                &[],
                Some(b.block(&[super_stmt, body_stmt], span())),
                span(),
            ))
            .constructor(b.constructor(
                &[b.param("v", "int", span())],
                Some(body_stmt),
                span(),
            ))
            .build();

        let provider = RuntimeMetadata::default();
        let (out, report) = Synthesizer::new(&b, &provider, SynthesisConfig::default())
            .synthesize_with_report(&class)
            .unwrap();
        assert_eq!(report.constructors_rewritten, 2);

        let first = body_statements(out.constructors[0].body);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], super_stmt);
        assert_eq!(assigned_field(&first[1]), Some("x"));
        assert_eq!(first[2], body_stmt);

        let second = body_statements(out.constructors[1].body);
        assert_eq!(assigned_field(&second[0]), Some("x"));
        assert_eq!(second[1], body_stmt);
    }

    #[test]
    fn no_initializers_leave_constructors_identical() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctor = b.constructor(&[], Some(b.ret(None, span())), span());
        let class = b
            .class("A", span())
            .field(b.field_decl("x", "int", None, span()))
            .constructor(ctor)
            .build();

        let out = synth(&b, &class).unwrap();
        assert_eq!(out.constructors[0], ctor);
        assert!(std::ptr::eq(
            out.constructors[0].body.unwrap(),
            class.constructors[0].body.unwrap()
        ));
    }

    // =========================================================================
    // Accessor and idempotence
    // =========================================================================

    #[test]
    fn accessor_returns_metadata_field() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let out = synth(&b, &b.class("A", span()).build()).unwrap();

        let accessor = out.method("getMetaClass", 0).expect("accessor");
        assert_eq!(accessor.return_type.name, "sable.lang.MetaClass");
        let stmts = body_statements(accessor.body);
        assert!(matches!(
            stmts,
            [Stmt::Return(ReturnStmt { value: Some(Expr::Field(f)), .. })]
                if f.name.name == "metaClass"
        ));
    }

    #[test]
    fn resynthesis_is_idempotent() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let once = synth(&b, &point(&b)).unwrap();
        let twice = synth(&b, &once).unwrap();

        assert_eq!(count_interface(&twice, "sable.lang.DynamicObject"), 1);
        assert_eq!(twice.fields.len(), once.fields.len());
        assert_eq!(method_names(&twice), method_names(&once));
        assert_eq!(twice.constructors, once.constructors);
    }

    #[test]
    fn resynthesis_with_declared_metadata_field_keeps_one_assignment() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b
            .class("Tagged", span())
            .field(b.field_decl("metaClass", "custom.Meta", None, span()))
            .field(b.field_decl("x", "int", Some(b.int(0, span())), span()))
            .build();
        let provider = RuntimeMetadata::default();
        let synthesizer = Synthesizer::new(&b, &provider, SynthesisConfig::default());

        let (once, first) = synthesizer.synthesize_with_report(&class).unwrap();
        let (twice, second) = synthesizer.synthesize_with_report(&once).unwrap();

        assert_eq!(first.constructors_rewritten, 1);
        assert_eq!(second.constructors_rewritten, 0);
        assert_eq!(second.methods_injected, 0);
        assert!(!second.constructor_added);
        let stmts = body_statements(twice.constructors[0].body);
        let names: Vec<_> = stmts.iter().map(|s| assigned_field(s)).collect();
        assert_eq!(names, [Some("x")]);
        assert_eq!(twice, once);
    }

    #[test]
    fn resynthesis_under_error_policy_succeeds() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let once = synth(&b, &point(&b)).unwrap();
        assert!(strict(&b, &once).is_ok());
    }

    #[test]
    fn custom_names_are_used() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let provider = RuntimeMetadata::new("rt.Meta", "rt.Lookup", "of");
        let config = SynthesisConfig::default()
            .with_marker_interface("rt.Dynamic")
            .with_metadata_field("meta")
            .with_dispatch_method("dispatch")
            .with_metadata_accessor("meta");

        let synthesizer = Synthesizer::new(&b, &provider, config);
        assert_eq!(synthesizer.config().metadata_field, "meta");
        assert_eq!(synthesizer.config().collision_policy, CollisionPolicy::Skip);

        let out = synthesizer.synthesize(&b.class("A", span()).build()).unwrap();
        assert!(out.implements("rt.Dynamic"));
        assert_eq!(out.field("meta").map(|f| f.ty.name), Some("rt.Meta"));
        assert_eq!(method_names(&out), ["dispatch", "meta"]);
    }
}
