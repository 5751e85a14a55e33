//! Unified error types for Sable.
//!
//! ## Error Hierarchy
//!
//! ```text
//! SableError (top-level wrapper)
//! ├── CompilationError  - class synthesis and other front-end passes
//! ├── RegistrationError - runtime type/method registration
//! └── RuntimeError      - dispatch and invocation
//!     └── NativeError   - raised by native method bodies, carried unchanged
//! ```
//!
//! Each phase-specific type can be handled directly, or converted into
//! [`SableError`] with `?`.

use thiserror::Error;

use crate::Span;
use crate::native_error::NativeError;

// ============================================================================
// Compilation Errors
// ============================================================================

/// Errors that occur while transforming declarations before code generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilationError {
    /// A member name is defined twice in the same class.
    #[error("at {span}: duplicate definition '{name}'")]
    DuplicateDefinition {
        /// Member name.
        name: String,
        /// Where the later definition was found.
        span: Span,
    },

    /// A declaration is structurally malformed.
    #[error("at {span}: {message}")]
    InvalidDeclaration {
        /// Description of the problem.
        message: String,
        /// Where the declaration is.
        span: Span,
    },

    /// An internal invariant was broken.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the broken invariant.
        message: String,
    },
}

impl CompilationError {
    /// Create a duplicate-definition error.
    pub fn duplicate(name: impl Into<String>, span: Span) -> Self {
        CompilationError::DuplicateDefinition {
            name: name.into(),
            span,
        }
    }

    /// Position of the offending declaration; the default span for internal errors.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::DuplicateDefinition { span, .. } => *span,
            CompilationError::InvalidDeclaration { span, .. } => *span,
            CompilationError::Internal { .. } => Span::default(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while registering types and methods with the runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The same type name was registered twice.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A method declaration cannot be registered as given.
    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors that occur while dispatching or invoking methods.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The number of arguments did not match the method's logical arity.
    #[error("{method} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Method name.
        method: String,
        /// Logical parameter count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// A type could not be default-constructed.
    #[error("cannot instantiate {type_name}: {reason}")]
    InstantiationFailure {
        /// The type that was requested.
        type_name: String,
        /// Why construction failed.
        reason: String,
    },

    /// No method with the given name and arity exists on the receiver's type.
    #[error("no method '{name}' taking {arity} argument(s)")]
    MethodNotFound {
        /// Method name.
        name: String,
        /// Logical argument count that was looked up.
        arity: usize,
    },

    /// A value had the wrong runtime type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: String,
        actual: String,
    },

    /// A native method body failed.
    #[error(transparent)]
    Native(#[from] NativeError),
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for all Sable operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SableError {
    /// Raised while synthesizing declarations.
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    /// Raised while populating the registry.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Raised while dispatching a call.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl SableError {
    pub fn is_compilation(&self) -> bool {
        matches!(self, SableError::Compilation(_))
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, SableError::Registration(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, SableError::Runtime(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
