//! Configuration for class synthesis.

/// Default marker interface added to every synthesized class.
pub const DEFAULT_MARKER_INTERFACE: &str = "sable.lang.DynamicObject";
/// Default name of the per-instance metadata field.
pub const DEFAULT_METADATA_FIELD: &str = "metaClass";
/// Default name of the generic dispatch method.
pub const DEFAULT_DISPATCH_METHOD: &str = "invokeMethod";
/// Default name of the metadata accessor.
pub const DEFAULT_METADATA_ACCESSOR: &str = "getMetaClass";

/// What to do when a synthesized member's name is already taken by a
/// declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionPolicy {
    /// Keep the declared member and skip the synthesized one.
    #[default]
    Skip,
    /// Fail synthesis with a duplicate-definition error.
    Error,
}

/// Names and policies used by the synthesizer.
///
/// ```
/// use sable_compiler::{CollisionPolicy, SynthesisConfig};
///
/// let config = SynthesisConfig::default()
///     .with_metadata_field("meta")
///     .with_collision_policy(CollisionPolicy::Error);
/// assert_eq!(config.metadata_field, "meta");
/// assert_eq!(config.dispatch_method, "invokeMethod");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Interface every synthesized class implements.
    pub marker_interface: String,
    /// Name of the injected metadata field.
    pub metadata_field: String,
    /// Name of the injected dispatch method.
    pub dispatch_method: String,
    /// Name of the injected metadata accessor.
    pub metadata_accessor: String,
    /// Type of the dispatch method's `name` parameter.
    pub string_type: String,
    /// Type of the dispatch method's `arguments` parameter and its return.
    pub object_type: String,
    /// Behaviour on member-name collisions.
    pub collision_policy: CollisionPolicy,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            marker_interface: DEFAULT_MARKER_INTERFACE.to_string(),
            metadata_field: DEFAULT_METADATA_FIELD.to_string(),
            dispatch_method: DEFAULT_DISPATCH_METHOD.to_string(),
            metadata_accessor: DEFAULT_METADATA_ACCESSOR.to_string(),
            string_type: "String".to_string(),
            object_type: "Object".to_string(),
            collision_policy: CollisionPolicy::Skip,
        }
    }
}

impl SynthesisConfig {
    /// Set the marker interface.
    pub fn with_marker_interface(mut self, name: impl Into<String>) -> Self {
        self.marker_interface = name.into();
        self
    }

    /// Set the metadata field name.
    pub fn with_metadata_field(mut self, name: impl Into<String>) -> Self {
        self.metadata_field = name.into();
        self
    }

    /// Set the dispatch method name.
    pub fn with_dispatch_method(mut self, name: impl Into<String>) -> Self {
        self.dispatch_method = name.into();
        self
    }

    /// Set the metadata accessor name.
    pub fn with_metadata_accessor(mut self, name: impl Into<String>) -> Self {
        self.metadata_accessor = name.into();
        self
    }

    /// Set the string and object type names.
    pub fn with_types(
        mut self,
        string_type: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        self.string_type = string_type.into();
        self.object_type = object_type.into();
        self
    }

    /// Set the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
