//! The `mut` forwarding wrapper and its unwrap

use std::fmt;
use std::rc::Rc;

use super::{Ref, RefId, Reference, UpdatableReference};
use crate::error::RefError;
use crate::value::Value;

/// A reference-like adapter over a write target.
///
/// Both read and update forward to the source. The wrapper exists so a
/// binding can be handed around as an explicit write handle; it never owns
/// a value of its own.
pub struct ForwardingReference {
    id: RefId,
    source: Ref,
    target: Rc<dyn UpdatableReference>,
}

impl ForwardingReference {
    /// Wrap an updatable reference.
    ///
    /// Wrapping a forwarding reference returns it unchanged, so wrappers
    /// never nest.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotWritable` if `reference` has no update.
    pub fn wrap(reference: &Ref) -> Result<Ref, RefError> {
        if let Ref::Forwarding(_) = reference {
            return Ok(reference.clone());
        }

        let target = reference
            .updatable()
            .ok_or(RefError::NotWritable { id: reference.id() })?;

        let wrapper = ForwardingReference {
            id: RefId::next(),
            source: reference.clone(),
            target,
        };
        tracing::trace!(wrapper = %wrapper.id, source = %reference.id(), "wrapped forwarding reference");

        Ok(Ref::Forwarding(Rc::new(wrapper)))
    }

    /// The reference this wrapper forwards to.
    pub fn source(&self) -> &Ref {
        &self.source
    }
}

impl Reference for ForwardingReference {
    fn id(&self) -> RefId {
        self.id
    }

    fn read(&self) -> Value {
        self.source.read()
    }
}

impl UpdatableReference for ForwardingReference {
    fn update(&self, value: Value) {
        self.target.update(value);
    }
}

impl fmt::Debug for ForwardingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardingReference")
            .field("id", &self.id)
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a forwarding wrapper to the reference it forwards to.
///
/// Any other reference, read-only views included, is returned unchanged.
pub fn unwrap_forwarding(reference: &Ref) -> Ref {
    match reference {
        Ref::Forwarding(wrapper) => {
            tracing::trace!(wrapper = %wrapper.id, source = %wrapper.source.id(), "unwrapped forwarding reference");
            wrapper.source.clone()
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::RefKind;

    #[test]
    fn test_wrap_forwards_read_and_update() {
        let cell = Ref::cell(1);
        let wrapped = ForwardingReference::wrap(&cell).unwrap();

        assert_eq!(wrapped.kind(), RefKind::Forwarding);
        assert_eq!(wrapped.read(), Value::Int(1));

        wrapped.try_update(2).unwrap();
        assert_eq!(cell.read(), Value::Int(2));
    }

    #[test]
    fn test_wrap_does_not_nest() {
        let cell = Ref::cell(1);
        let once = ForwardingReference::wrap(&cell).unwrap();
        let twice = ForwardingReference::wrap(&once).unwrap();

        assert!(once.same(&twice));
        assert!(unwrap_forwarding(&twice).same(&cell));
    }

    #[test]
    fn test_wrap_requires_update() {
        let constant = Ref::constant(1);
        assert_eq!(
            ForwardingReference::wrap(&constant).unwrap_err(),
            RefError::NotWritable { id: constant.id() }
        );
    }

    #[test]
    fn test_unwrap_passes_through_other_kinds() {
        let cell = Ref::cell(1);
        let constant = Ref::constant(1);

        assert!(unwrap_forwarding(&cell).same(&cell));
        assert!(unwrap_forwarding(&constant).same(&constant));
    }
}
