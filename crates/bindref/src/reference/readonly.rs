//! Read-only views
//!
//! A read-only view reads through to a source reference and has no update
//! capability at all: [`ReadOnlyReference`] implements [`Reference`] but not
//! [`UpdatableReference`](super::UpdatableReference), so there is no method a
//! caller could reach to write through it. Its source is private, so the view
//! cannot be collapsed back into a writable handle either.
//!
//! # Example
//!
//! ```
//! use bindref::{make_read_only, Ref, Value};
//!
//! let clicks = Ref::cell(3);
//! let view = make_read_only(&clicks);
//! assert_eq!(view.read(), Value::Int(3));
//!
//! clicks.try_update(4).unwrap();
//! assert_eq!(view.read(), Value::Int(4)); // live, not a snapshot
//!
//! assert!(!view.is_updatable());
//! assert!(view.try_update(5).is_err());
//! assert_eq!(clicks.read(), Value::Int(4));
//! ```

use std::rc::Rc;

use super::{unwrap_forwarding, Ref, RefId, Reference};
use crate::value::Value;

/// A reference whose reads delegate to a source and which cannot be updated.
#[derive(Debug)]
pub struct ReadOnlyReference {
    id: RefId,
    source: Ref,
}

impl ReadOnlyReference {
    fn new(source: Ref) -> Self {
        Self {
            id: RefId::next(),
            source,
        }
    }
}

impl Reference for ReadOnlyReference {
    fn id(&self) -> RefId {
        self.id
    }

    fn read(&self) -> Value {
        // No caching: every read observes the source's current value
        self.source.read()
    }
}

/// Produce a new read-only view of `reference`.
///
/// A forwarding (`mut`) wrapper is unwrapped first so the view reads from the
/// wrapper's source. Read-only views are not unwrapped: applying this to a
/// view yields a new view delegating through it. Neither `reference` nor its
/// source is modified, and a new object is created on every call.
pub fn make_read_only(reference: &Ref) -> Ref {
    let source = unwrap_forwarding(reference);
    let view = ReadOnlyReference::new(source);
    tracing::trace!(view = %view.id, source = %view.source.id(), "created read-only view");
    Ref::ReadOnly(Rc::new(view))
}
