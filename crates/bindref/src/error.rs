//! Error types for reference, helper and scope operations

use thiserror::Error;

use crate::reference::RefId;
use crate::value::Value;

/// Errors raised by the checked reference operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    /// The reference has no update capability.
    ///
    /// Permanent: the capability set of a reference never changes, so
    /// retrying the write on the same reference cannot succeed.
    #[error("reference {id} is not writable")]
    NotWritable {
        /// The reference that was written to
        id: RefId,
    },
}

/// Errors raised while dispatching a helper invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// No helper registered under this name
    #[error("unknown helper: {name}")]
    UnknownHelper {
        /// The requested helper name
        name: String,
    },

    /// Wrong number of positional arguments
    #[error("helper `{helper}` expects {expected} positional argument(s), got {got}")]
    Arity {
        /// The helper being invoked
        helper: String,
        /// Required positional count
        expected: usize,
        /// Supplied positional count
        got: usize,
    },

    /// A reference operation performed by the helper failed
    #[error(transparent)]
    Ref(#[from] RefError),
}

/// Errors raised by scope binding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// No binding with this name is visible
    #[error("undefined binding: {name}")]
    UndefinedBinding {
        /// The binding name
        name: String,
    },

    /// The binding's reference lacks update and the write policy rejects
    /// local overrides
    #[error("binding `{name}` is not writable")]
    NotWritable {
        /// The binding name
        name: String,
    },
}

/// Umbrella error for rendering-side callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Reference error
    #[error(transparent)]
    Ref(#[from] RefError),

    /// Helper dispatch error
    #[error(transparent)]
    Helper(#[from] HelperError),

    /// Scope error
    #[error(transparent)]
    Scope(#[from] ScopeError),
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Human-readable type name of a value, for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::List(_) => "list",
        Value::Object(_) => "object",
    }
}
