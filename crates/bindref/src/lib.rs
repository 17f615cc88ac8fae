//! # bindref
//!
//! The reference layer of a template-rendering runtime.
//!
//! A [`Ref`] is a handle to a dynamically computed value. Every reference can
//! be read; only some can be updated. The [`make_read_only`] transformation
//! produces a new reference that reads through to its source but has no
//! update capability at all, so writes performed by whoever receives it never
//! reach the owner of the original value.
//!
//! ## Architecture
//!
//! - **References**: `Reference` / `UpdatableReference` traits and the `Ref`
//!   handle that tags each reference with its capability shape
//! - **Normalizer**: [`unwrap_forwarding`] resolves `mut` wrappers to their
//!   source before capabilities are stripped
//! - **Read-only views**: [`make_read_only`] and [`ReadOnlyReference`]
//! - **Helpers**: the `readonly` and `mut` template helpers
//! - **Scopes**: child scope bindings that check update presence on write-back
//!
//! ## Example
//!
//! ```
//! use bindref::{make_read_only, Ref, Value};
//!
//! let a = Ref::cell(3);
//! let b = make_read_only(&a);
//! assert_eq!(b.read(), Value::Int(3));
//!
//! a.try_update(4).unwrap();
//! assert_eq!(b.read(), Value::Int(4));
//! assert!(!b.is_updatable());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod helpers;
pub mod reference;
pub mod scope;
pub mod value;

// Re-export main types
pub use context::{RenderContext, WritePolicy};
pub use error::{HelperError, RefError, RenderError, Result, ScopeError};
pub use helpers::{Helper, HelperArgs, HelperFnPtr, Helpers};
pub use reference::{
    make_read_only, unwrap_forwarding, ConstReference, ForwardingReference, ReadOnlyReference,
    Ref, RefId, RefKind, Reference, UpdatableReference, ValueCell,
};
pub use scope::{Binding, Scope, ScopeGuard, WriteOutcome};
pub use value::{ObjectValue, Value};

/// bindref version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
