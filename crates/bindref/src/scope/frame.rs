//! RAII guard for child scope frames

use super::Scope;

/// RAII guard that pops a child frame when dropped.
///
/// # Example
///
/// ```
/// use bindref::{Ref, Scope};
///
/// let mut scope = Scope::new();
/// scope.define_value("title", "Inbox");
///
/// {
///     let mut child = scope.child_scope();
///     child.define("heading", Ref::constant("Inbox"));
///     // heading is visible here
/// }
/// // guard dropped, frame popped, heading is gone
/// assert!(!scope.contains("heading"));
/// assert!(scope.contains("title"));
/// ```
pub struct ScopeGuard<'a> {
    scope: &'a mut Scope,
}

impl Scope {
    /// Push a child frame now and pop it when the guard drops.
    pub fn child_scope(&mut self) -> ScopeGuard<'_> {
        self.push_frame();
        ScopeGuard { scope: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        self.scope.pop_frame();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Scope;

    fn deref(&self) -> &Self::Target {
        self.scope
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_child_scope_creates_frame() {
        let mut scope = Scope::new();
        let initial_depth = scope.depth();

        {
            let child = scope.child_scope();
            assert_eq!(child.depth(), initial_depth + 1);
        }

        assert_eq!(scope.depth(), initial_depth);
    }

    #[test]
    fn test_child_bindings_shadow_then_vanish() {
        let mut scope = Scope::new();
        scope.define_value("x", 1);

        {
            let mut child = scope.child_scope();
            child.define_value("x", 10);
            assert_eq!(child.read("x"), Some(Value::Int(10)));
            assert!(child.contains_in_current_scope("x"));
        }

        assert_eq!(scope.read("x"), Some(Value::Int(1)));
        assert_eq!(scope.len(), 1);
    }
}
