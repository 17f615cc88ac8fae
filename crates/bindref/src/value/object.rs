//! Shared object values

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;

/// A keyed object shared between every value that holds it.
///
/// Uses IndexMap to preserve insertion order (predictable iteration and
/// display). Cloning an `ObjectValue` clones the handle, not the fields, so a
/// mutation through one clone is visible through all of them.
#[derive(Clone, Default)]
pub struct ObjectValue(Rc<RefCell<IndexMap<String, Value>>>);

impl ObjectValue {
    /// Create a new empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder pattern)
    pub fn with_field(self, name: impl Into<String>, value: Value) -> Self {
        self.0.borrow_mut().insert(name.into(), value);
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().get(name).cloned()
    }

    /// Set a field, returning the previous value if there was one
    pub fn set(&self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().insert(name.into(), value)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the object has no fields
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Check whether two handles point at the same object
    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Visit the fields without cloning them.
    ///
    /// Returns `None` if the object is currently being mutated.
    pub(crate) fn with_fields<R>(&self, f: impl FnOnce(&IndexMap<String, Value>) -> R) -> Option<R> {
        self.0.try_borrow().ok().map(|fields| f(&fields))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Cycle Tracking
// ═══════════════════════════════════════════════════════════════════

/// An object traversal in progress on this thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Visit {
    /// Formatting one object
    Format(usize),
    /// Comparing a pair of objects
    Compare(usize, usize),
}

thread_local! {
    static VISITING: RefCell<Vec<Visit>> = const { RefCell::new(Vec::new()) };
}

/// Marks a traversal as active until dropped.
pub(super) struct VisitGuard(Visit);

impl VisitGuard {
    /// Start a traversal, or `None` if the same traversal is already active
    /// further up the stack (the object graph has a cycle).
    pub(super) fn enter(visit: Visit) -> Option<Self> {
        VISITING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&visit) {
                return None;
            }
            active.push(visit);
            Some(VisitGuard(visit))
        })
    }

    pub(super) fn format(obj: &ObjectValue) -> Option<Self> {
        Self::enter(Visit::Format(obj.addr()))
    }
}

impl Drop for VisitGuard {
    fn drop(&mut self) {
        VISITING.with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|v| *v == self.0) {
                active.remove(pos);
            }
        });
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        // Re-entering a pair already under comparison: nothing seen so far
        // on this path differs, so the cycle compares equal
        let Some(_guard) = VisitGuard::enter(Visit::Compare(self.addr(), other.addr())) else {
            return true;
        };
        *self.0.borrow() == *other.0.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_builder_preserves_order() {
        let obj = ObjectValue::new()
            .with_field("b", Value::Int(2))
            .with_field("a", Value::Int(1));

        assert_eq!(obj.keys(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(obj.get("a"), Some(Value::Int(1)));
        assert_eq!(obj.get("z"), None);
    }

    #[test]
    fn test_object_clones_share_fields() {
        let obj = ObjectValue::new();
        let alias = obj.clone();

        alias.set("count", Value::Int(3));

        assert_eq!(obj.get("count"), Some(Value::Int(3)));
        assert!(obj.ptr_eq(&alias));
    }

    #[test]
    fn test_self_referencing_objects_compare() {
        let a = ObjectValue::new().with_field("n", Value::Int(1));
        a.set("me", Value::Object(a.clone()));
        let b = ObjectValue::new().with_field("n", Value::Int(1));
        b.set("me", Value::Object(b.clone()));

        assert_eq!(a, b);

        let c = ObjectValue::new().with_field("n", Value::Int(2));
        c.set("me", Value::Object(c.clone()));
        assert_ne!(a, c);
    }

    #[test]
    fn test_visit_guard_released_on_drop() {
        let obj = ObjectValue::new();
        {
            let _guard = VisitGuard::format(&obj);
            assert!(VisitGuard::format(&obj).is_none());
        }
        assert!(VisitGuard::format(&obj).is_some());
    }

    #[test]
    fn test_object_equality_by_content() {
        let a = ObjectValue::new().with_field("x", Value::Int(1));
        let b = ObjectValue::new().with_field("x", Value::Int(1));

        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }
}
