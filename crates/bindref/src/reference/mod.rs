//! References: handles to dynamically computed, possibly mutable values
//!
//! A reference always supports [`Reference::read`]. Whether it also supports
//! update is decided by its type: only implementors of
//! [`UpdatableReference`] have an `update` method, and the [`Ref`] handle
//! records which of the two capability sets a reference was built with.
//!
//! # Variants
//!
//! ```text
//! Ref::Immutable   read                     (collaborator supplied)
//! Ref::Mutable     read + update            (collaborator supplied)
//! Ref::Forwarding  read + update → source   (`mut` wrapper)
//! Ref::ReadOnly    read → source            (read-only view)
//! ```

mod cell;
mod forwarding;
mod readonly;

pub use cell::{ConstReference, ValueCell};
pub use forwarding::{unwrap_forwarding, ForwardingReference};
pub use readonly::{make_read_only, ReadOnlyReference};

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::RefError;
use crate::value::Value;

static NEXT_REF_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a single reference object.
///
/// References are never compared by content; two references reading the
/// same value are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefId(u64);

impl RefId {
    /// Mint a fresh, process-unique id.
    pub fn next() -> Self {
        RefId(NEXT_REF_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id number
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The read capability every reference has.
pub trait Reference {
    /// This reference's identity. Must stay the same for the object's lifetime.
    fn id(&self) -> RefId;

    /// Produce the current value.
    fn read(&self) -> Value;
}

/// The update capability, present only on mutable references.
pub trait UpdatableReference: Reference {
    /// Replace the current value. A subsequent `read` observes it.
    fn update(&self, value: Value);
}

/// Which capability shape a [`Ref`] was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// Terminal reference without update
    Immutable,
    /// Terminal reference with update
    Mutable,
    /// `mut` wrapper forwarding read and update to a source
    Forwarding,
    /// Read-only view over a source
    ReadOnly,
}

/// A shared handle to a reference, tagged by capability shape.
///
/// Cloning a `Ref` clones the handle; both clones are the same reference
/// (same [`RefId`]).
#[derive(Clone)]
pub enum Ref {
    /// Terminal reference without update
    Immutable(Rc<dyn Reference>),

    /// Terminal reference with update
    Mutable(Rc<dyn UpdatableReference>),

    /// `mut` wrapper over an updatable source
    Forwarding(Rc<ForwardingReference>),

    /// Read-only view over a source
    ReadOnly(Rc<ReadOnlyReference>),
}

impl Ref {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Wrap a collaborator reference that only supports read.
    pub fn immutable(reference: impl Reference + 'static) -> Self {
        Ref::Immutable(Rc::new(reference))
    }

    /// Wrap a collaborator reference that supports read and update.
    pub fn mutable(reference: impl UpdatableReference + 'static) -> Self {
        Ref::Mutable(Rc::new(reference))
    }

    /// A new mutable cell holding `value`.
    pub fn cell(value: impl Into<Value>) -> Self {
        Ref::mutable(ValueCell::new(value))
    }

    /// A new constant reference holding `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        Ref::immutable(ConstReference::new(value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Read path
    // ═══════════════════════════════════════════════════════════════════

    /// This reference's identity.
    pub fn id(&self) -> RefId {
        match self {
            Ref::Immutable(r) => r.id(),
            Ref::Mutable(r) => r.id(),
            Ref::Forwarding(r) => r.id(),
            Ref::ReadOnly(r) => r.id(),
        }
    }

    /// Produce the current value.
    pub fn read(&self) -> Value {
        match self {
            Ref::Immutable(r) => r.read(),
            Ref::Mutable(r) => r.read(),
            Ref::Forwarding(r) => r.read(),
            Ref::ReadOnly(r) => r.read(),
        }
    }

    /// The capability shape of this reference.
    pub fn kind(&self) -> RefKind {
        match self {
            Ref::Immutable(_) => RefKind::Immutable,
            Ref::Mutable(_) => RefKind::Mutable,
            Ref::Forwarding(_) => RefKind::Forwarding,
            Ref::ReadOnly(_) => RefKind::ReadOnly,
        }
    }

    /// Check whether two handles are the same reference.
    pub fn same(&self, other: &Ref) -> bool {
        self.id() == other.id()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Update capability
    // ═══════════════════════════════════════════════════════════════════

    /// The update capability, if this reference has one.
    ///
    /// This is the presence check the runtime performs before writing back.
    pub fn updatable(&self) -> Option<Rc<dyn UpdatableReference>> {
        match self {
            Ref::Mutable(r) => Some(Rc::clone(r)),
            Ref::Forwarding(r) => Some(Rc::clone(r) as Rc<dyn UpdatableReference>),
            Ref::Immutable(_) | Ref::ReadOnly(_) => None,
        }
    }

    /// Check whether this reference supports update.
    pub fn is_updatable(&self) -> bool {
        matches!(self, Ref::Mutable(_) | Ref::Forwarding(_))
    }

    /// Write through the update capability if present.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotWritable` if this reference has no update.
    pub fn try_update(&self, value: impl Into<Value>) -> Result<(), RefError> {
        let target = self
            .updatable()
            .ok_or(RefError::NotWritable { id: self.id() })?;
        target.update(value.into());
        Ok(())
    }

    /// A new read-only view over this reference.
    ///
    /// Shorthand for [`make_read_only`].
    pub fn read_only(&self) -> Ref {
        make_read_only(self)
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_ids_are_unique() {
        let a = Ref::cell(1);
        let b = Ref::cell(1);

        assert!(!a.same(&b));
        assert!(a.same(&a.clone()));
        assert_eq!(a.read(), b.read());
    }

    #[test]
    fn test_kinds_and_capabilities() {
        let cell = Ref::cell(1);
        let constant = Ref::constant(1);

        assert_eq!(cell.kind(), RefKind::Mutable);
        assert!(cell.is_updatable());
        assert!(cell.updatable().is_some());

        assert_eq!(constant.kind(), RefKind::Immutable);
        assert!(!constant.is_updatable());
        assert!(constant.updatable().is_none());
    }

    #[test]
    fn test_try_update() {
        let cell = Ref::cell(1);
        cell.try_update(2).unwrap();
        assert_eq!(cell.read(), Value::Int(2));

        let constant = Ref::constant(1);
        assert_eq!(
            constant.try_update(2),
            Err(RefError::NotWritable { id: constant.id() })
        );
        assert_eq!(constant.read(), Value::Int(1));
    }

    #[test]
    fn test_debug_shows_kind_and_id() {
        let cell = Ref::cell(1);
        assert_eq!(format!("{:?}", cell), format!("Mutable(#{})", cell.id().as_u64()));
    }
}
