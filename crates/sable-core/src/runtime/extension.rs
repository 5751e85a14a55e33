//! Extension methods: receiver-first free functions exposed as instance methods.
//!
//! A free function `scale(Point p, int dx, int dy)` registered as an extension
//! of `Point` is looked up on `Point` as `scale(int, int)`. Callers see the
//! logical signature; the delegate is invoked with the physical one.
//!
//! ```text
//! delegate params:   [Point, int, int]    (physical, arity 3)
//! extension params:  [int, int]           (logical, arity 2)
//! declaring type:    Point
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::RuntimeError;
use crate::{Modifiers, TypeHash};

use super::{Dynamic, InstanceFactory, MetaMethod};

/// Adapter presenting a receiver-first delegate as a method of its first
/// parameter's type.
///
/// The adapter is always dispatched statically. On invocation the supplied
/// receiver is discarded and a fresh default instance of the declaring type
/// is placed in the delegate's first slot.
#[derive(Clone)]
pub struct ExtensionMethod {
    delegate: Arc<dyn MetaMethod>,
    factory: Arc<dyn InstanceFactory>,
    logical: Vec<TypeHash>,
}

impl ExtensionMethod {
    /// Wrap `delegate`, using `factory` to build receivers.
    pub fn new(delegate: Arc<dyn MetaMethod>, factory: Arc<dyn InstanceFactory>) -> Self {
        let logical = match delegate.parameter_types() {
            [_, rest @ ..] => rest.to_vec(),
            [] => Vec::new(),
        };
        Self {
            delegate,
            factory,
            logical,
        }
    }

    /// The wrapped delegate.
    pub fn delegate(&self) -> &Arc<dyn MetaMethod> {
        &self.delegate
    }
}

impl MetaMethod for ExtensionMethod {
    fn name(&self) -> &str {
        self.delegate.name()
    }

    fn declaring_type(&self) -> TypeHash {
        self.delegate
            .parameter_types()
            .first()
            .copied()
            .unwrap_or(TypeHash::EMPTY)
    }

    fn parameter_types(&self) -> &[TypeHash] {
        &self.logical
    }

    fn invocation_parameter_types(&self) -> &[TypeHash] {
        self.delegate.parameter_types()
    }

    fn modifiers(&self) -> Modifiers {
        self.delegate.modifiers()
    }

    fn is_static(&self) -> bool {
        true
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn invoke(&self, _receiver: Dynamic, args: Vec<Dynamic>) -> Result<Dynamic, RuntimeError> {
        if args.len() != self.logical.len() {
            return Err(RuntimeError::ArityMismatch {
                method: self.name().to_string(),
                expected: self.logical.len(),
                got: args.len(),
            });
        }

        let receiver_type = self.declaring_type();
        trace!(
            method = self.name(),
            receiver = %receiver_type,
            args = args.len(),
            "invoking extension method"
        );

        let this = self.factory.instantiate(receiver_type)?;

        let mut physical = Vec::with_capacity(args.len() + 1);
        physical.push(this);
        physical.extend(args);

        self.delegate.invoke(Dynamic::Null, physical)
    }
}

impl fmt::Debug for ExtensionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionMethod")
            .field("delegate", &self.delegate)
            .field("logical", &self.logical)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native_error::NativeError;
    use crate::runtime::{CallContext, NativeMethod};
    use crate::type_hash::builtins;

    #[derive(Debug, Default)]
    struct Point {
        x: i64,
    }

    fn point() -> TypeHash {
        TypeHash::from_name("Point")
    }

    /// Builds `Point` instances, fails for anything else.
    struct PointFactory;

    impl InstanceFactory for PointFactory {
        fn instantiate(&self, ty: TypeHash) -> Result<Dynamic, RuntimeError> {
            if ty == point() {
                Ok(Dynamic::native(Point::default()))
            } else {
                Err(RuntimeError::InstantiationFailure {
                    type_name: ty.to_string(),
                    reason: "no default constructor".into(),
                })
            }
        }
    }

    fn noop(_: &mut CallContext) -> Result<(), NativeError> {
        Ok(())
    }

    fn extension(delegate: NativeMethod) -> ExtensionMethod {
        ExtensionMethod::new(Arc::new(delegate), Arc::new(PointFactory))
    }

    fn scale() -> NativeMethod {
        NativeMethod::function(
            "scale",
            vec![point(), builtins::int(), builtins::int()],
            |ctx: &mut CallContext| {
                let p = ctx.arg_native::<Point>(0)?;
                let base = p.x;
                let dx: i64 = ctx.arg(1)?;
                let dy: i64 = ctx.arg(2)?;
                ctx.set_return(base + dx * dy);
                Ok(())
            },
        )
    }

    #[test]
    fn logical_arity_drops_receiver() {
        let ext = extension(scale());
        assert_eq!(ext.arity(), 2);
        assert_eq!(ext.parameter_types(), &[builtins::int(), builtins::int()]);
        assert_eq!(
            ext.invocation_parameter_types(),
            &[point(), builtins::int(), builtins::int()]
        );
    }

    #[test]
    fn delegate_is_shared_with_the_adapter() {
        let delegate: Arc<dyn MetaMethod> = Arc::new(scale());
        let ext = ExtensionMethod::new(Arc::clone(&delegate), Arc::new(PointFactory));
        assert!(Arc::ptr_eq(ext.delegate(), &delegate));
        assert_eq!(ext.delegate().arity(), 3);
        assert_eq!(ext.name(), "scale");
    }

    #[test]
    fn receiver_only_delegate_has_no_logical_params() {
        let ext = extension(NativeMethod::function("touch", vec![point()], noop));
        assert_eq!(ext.arity(), 0);
        assert!(ext.parameter_types().is_empty());
        assert_eq!(ext.declaring_type(), point());
    }

    #[test]
    fn parameterless_delegate_has_empty_declaring_type() {
        let ext = extension(NativeMethod::function("nothing", vec![], noop));
        assert_eq!(ext.arity(), 0);
        assert_eq!(ext.declaring_type(), TypeHash::EMPTY);
    }

    #[test]
    fn always_static_and_keeps_delegate_modifiers() {
        let delegate = NativeMethod::method(point(), "m", vec![point()], noop)
            .with_modifiers(Modifiers::PROTECTED);
        let ext = extension(delegate);
        assert!(ext.is_static());
        assert_eq!(ext.modifiers(), Modifiers::PROTECTED);
        assert_eq!(ext.name(), "m");
    }

    #[test]
    fn invoke_places_fresh_instance_first() {
        let ext = extension(scale());
        let out = ext
            .invoke(Dynamic::Null, vec![Dynamic::Int(3), Dynamic::Int(4)])
            .unwrap();
        assert_eq!(out, Dynamic::Int(12));
    }

    #[test]
    fn supplied_receiver_is_discarded() {
        let ext = extension(scale());
        let out = ext
            .invoke(
                Dynamic::native(Point { x: 100 }),
                vec![Dynamic::Int(1), Dynamic::Int(1)],
            )
            .unwrap();
        assert_eq!(out, Dynamic::Int(1));
    }

    #[test]
    fn wrong_arg_count_is_arity_mismatch() {
        let ext = extension(scale());
        let err = ext
            .invoke(Dynamic::Null, vec![Dynamic::Int(1)])
            .unwrap_err();
        assert_eq!(
            err,
            RuntimeError::ArityMismatch {
                method: "scale".into(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn non_constructible_receiver_fails() {
        let other = TypeHash::from_name("Opaque");
        let ext = extension(NativeMethod::function("f", vec![other], noop));
        let err = ext.invoke(Dynamic::Null, vec![]).unwrap_err();
        assert!(matches!(err, RuntimeError::InstantiationFailure { .. }));
    }

    #[test]
    fn delegate_error_is_propagated_unchanged() {
        let ext = extension(NativeMethod::function("fail", vec![point()], |_: &mut CallContext| {
            Err(NativeError::other("refused"))
        }));
        let err = ext.invoke(Dynamic::Null, vec![]).unwrap_err();
        assert_eq!(err, RuntimeError::Native(NativeError::other("refused")));
    }
}
