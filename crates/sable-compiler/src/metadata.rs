//! Where synthesized classes get their dispatch metadata from.
//!
//! The metadata field injected into every class is initialized by an
//! expression supplied by a [`MetadataProvider`]. The default provider,
//! [`RuntimeMetadata`], emits a call to the runtime lookup helper:
//!
//! ```text
//! public final sable.lang.MetaClass metaClass = sable.runtime.Invoker.metaClassOf(this)
//! ```

use sable_ast::{AstBuilder, Expr};
use sable_core::Span;

/// Supplies the metadata type and the expression that looks it up.
pub trait MetadataProvider {
    /// Type of the metadata field.
    fn metadata_type(&self) -> &str;

    /// Build the expression that fetches the metadata for `receiver`.
    fn lookup<'ast>(
        &self,
        builder: &AstBuilder<'ast>,
        receiver: &'ast Expr<'ast>,
        span: Span,
    ) -> &'ast Expr<'ast>;
}

/// Metadata looked up through a static runtime helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeMetadata {
    metadata_type: String,
    helper_owner: String,
    helper_method: String,
}

impl RuntimeMetadata {
    /// Default metadata type.
    pub const METADATA_TYPE: &'static str = "sable.lang.MetaClass";
    /// Default owner of the lookup helper.
    pub const HELPER_OWNER: &'static str = "sable.runtime.Invoker";
    /// Default name of the lookup helper.
    pub const HELPER_METHOD: &'static str = "metaClassOf";

    /// Create a provider with custom names.
    pub fn new(
        metadata_type: impl Into<String>,
        helper_owner: impl Into<String>,
        helper_method: impl Into<String>,
    ) -> Self {
        Self {
            metadata_type: metadata_type.into(),
            helper_owner: helper_owner.into(),
            helper_method: helper_method.into(),
        }
    }

    /// Owner type of the lookup helper.
    pub fn helper_owner(&self) -> &str {
        &self.helper_owner
    }

    /// Name of the lookup helper.
    pub fn helper_method(&self) -> &str {
        &self.helper_method
    }
}

impl Default for RuntimeMetadata {
    fn default() -> Self {
        Self::new(Self::METADATA_TYPE, Self::HELPER_OWNER, Self::HELPER_METHOD)
    }
}

impl MetadataProvider for RuntimeMetadata {
    fn metadata_type(&self) -> &str {
        &self.metadata_type
    }

    fn lookup<'ast>(
        &self,
        builder: &AstBuilder<'ast>,
        receiver: &'ast Expr<'ast>,
        span: Span,
    ) -> &'ast Expr<'ast> {
        builder.static_call(&self.helper_owner, &self.helper_method, &[receiver], span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn runtime_lookup_is_static_helper_call() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let provider = RuntimeMetadata::default();
        let span = Span::point(3, 1);

        let expr = provider.lookup(&b, b.this(span), span);
        let Expr::StaticCall(call) = expr else {
            panic!("expected static call, got {expr:?}");
        };
        assert_eq!(call.owner.name, "sable.runtime.Invoker");
        assert_eq!(call.method.name, "metaClassOf");
        assert_eq!(call.args.len(), 1);
        assert!(matches!(call.args[0], Expr::This(_)));
        assert_eq!(provider.metadata_type(), "sable.lang.MetaClass");
    }

    #[test]
    fn custom_names() {
        let provider = RuntimeMetadata::new("rt.Meta", "rt.Lookup", "of");
        assert_eq!(provider.metadata_type(), "rt.Meta");
        assert_eq!(provider.helper_owner(), "rt.Lookup");
        assert_eq!(provider.helper_method(), "of");
    }
}
