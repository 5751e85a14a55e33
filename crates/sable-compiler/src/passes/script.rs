//! Script-level synthesis pass.
//!
//! Walks every item of a script, recursing into namespaces, and runs the
//! [`Synthesizer`] on each class. Free functions pass through unchanged.
//! A class that fails synthesis is kept as declared and its error is
//! collected, so one bad class does not hide errors in the others.

use sable_ast::{AstBuilder, Item, NamespaceDecl, Script};
use sable_core::CompilationError;
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::metadata::MetadataProvider;
use crate::passes::synthesis::Synthesizer;

/// Output of the synthesis pass.
#[derive(Debug)]
pub struct SynthesisOutput<'ast> {
    /// The rewritten script.
    pub script: Script<'ast>,
    /// Number of classes synthesized successfully.
    pub classes_synthesized: usize,
    /// Number of methods injected across all classes.
    pub methods_injected: usize,
    /// Number of constructors whose bodies were rewritten.
    pub constructors_rewritten: usize,
    /// Collected errors; code generation must not run if any are present.
    pub errors: Vec<CompilationError>,
}

impl SynthesisOutput<'_> {
    /// True if every class was synthesized.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs class synthesis over a whole script.
pub struct SynthesisPass<'a, 'ast> {
    builder: AstBuilder<'ast>,
    synthesizer: Synthesizer<'a, 'ast>,
    classes_synthesized: usize,
    methods_injected: usize,
    constructors_rewritten: usize,
    errors: Vec<CompilationError>,
}

impl<'a, 'ast> SynthesisPass<'a, 'ast> {
    /// Create a new synthesis pass.
    pub fn new(
        builder: &AstBuilder<'ast>,
        provider: &'a dyn MetadataProvider,
        config: SynthesisConfig,
    ) -> Self {
        Self {
            builder: *builder,
            synthesizer: Synthesizer::new(builder, provider, config),
            classes_synthesized: 0,
            methods_injected: 0,
            constructors_rewritten: 0,
            errors: Vec::new(),
        }
    }

    /// Run the pass on a script.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, script: &Script<'ast>) -> SynthesisOutput<'ast> {
        let items = self.visit_items(script.items());

        debug!(
            classes = self.classes_synthesized,
            methods = self.methods_injected,
            constructors = self.constructors_rewritten,
            errors = self.errors.len(),
            "synthesis pass finished"
        );

        SynthesisOutput {
            script: Script::new(items, script.span()),
            classes_synthesized: self.classes_synthesized,
            methods_injected: self.methods_injected,
            constructors_rewritten: self.constructors_rewritten,
            errors: self.errors,
        }
    }

    fn visit_items(&mut self, items: &'ast [Item<'ast>]) -> &'ast [Item<'ast>] {
        let rewritten: Vec<Item<'ast>> = items.iter().map(|item| self.visit_item(item)).collect();
        self.builder.slice(&rewritten)
    }

    fn visit_item(&mut self, item: &Item<'ast>) -> Item<'ast> {
        match item {
            Item::Class(class) => match self.synthesizer.synthesize_with_report(class) {
                Ok((synthesized, report)) => {
                    self.classes_synthesized += 1;
                    self.methods_injected += report.methods_injected;
                    self.constructors_rewritten += report.constructors_rewritten;
                    Item::Class(synthesized)
                }
                Err(err) => {
                    debug!(class = %class.name, error = %err, "synthesis failed");
                    self.errors.push(err);
                    *item
                }
            },
            Item::Namespace(ns) => Item::Namespace(NamespaceDecl {
                items: self.visit_items(ns.items),
                ..*ns
            }),
            Item::Function(_) => *item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RuntimeMetadata;
    use bumpalo::Bump;
    use sable_core::Span;

    fn span() -> Span {
        Span::default()
    }

    #[test]
    fn synthesizes_classes_in_namespaces() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let nested = Item::Class(b.class("B", span()).build());
        let script = b.script(
            &[
                Item::Class(b.class("A", span()).build()),
                b.namespace(&["geo"], &[nested], span()),
            ],
            span(),
        );

        let provider = RuntimeMetadata::default();
        let output = SynthesisPass::new(&b, &provider, SynthesisConfig::default()).run(&script);

        assert!(output.is_success());
        assert_eq!(output.classes_synthesized, 2);
        assert_eq!(output.methods_injected, 4);
        for class in output.script.classes() {
            assert!(class.implements("sable.lang.DynamicObject"), "{}", class.name);
            assert!(class.field("metaClass").is_some());
        }
        let Item::Namespace(ns) = output.script.items()[1] else {
            panic!("expected namespace");
        };
        assert_eq!(ns.path[0].name, "geo");
    }

    #[test]
    fn functions_pass_through() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let func = Item::Function(b.function("main", "void", &[], None, span()));
        let script = b.script(&[func], span());

        let provider = RuntimeMetadata::default();
        let output = SynthesisPass::new(&b, &provider, SynthesisConfig::default()).run(&script);

        assert_eq!(output.script.items(), &[func]);
        assert_eq!(output.classes_synthesized, 0);
    }

    #[test]
    fn failed_class_is_kept_and_error_collected() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let bad = b
            .class("Bad", span())
            .field(b.field_decl("x", "int", None, span()))
            .field(b.field_decl("x", "int", None, span()))
            .build();
        let good = b
            .class("Good", span())
            .field(b.field_decl("x", "int", Some(b.int(1, span())), span()))
            .build();
        let script = b.script(&[Item::Class(bad), Item::Class(good)], span());

        let provider = RuntimeMetadata::default();
        let output = SynthesisPass::new(&b, &provider, SynthesisConfig::default()).run(&script);

        assert!(!output.is_success());
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.classes_synthesized, 1);
        assert_eq!(output.constructors_rewritten, 1);
        assert_eq!(output.script.items()[0], Item::Class(bad));
    }
}
