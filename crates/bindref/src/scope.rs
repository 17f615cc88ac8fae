//! Render scopes: names bound to references

mod frame;

pub use frame::ScopeGuard;

use crate::context::{RenderContext, WritePolicy};
use crate::error::ScopeError;
use crate::reference::Ref;
use crate::value::Value;

/// A name bound to a reference.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound reference
    pub reference: Ref,

    /// Whether a write replaced the original reference with a local cell
    pub localized: bool,
}

/// Result of a successful [`Scope::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write went through the binding's update capability
    Propagated,

    /// The binding had no update; it now holds a local cell with the value
    Localized,
}

/// Bindings visible while rendering a template and its children.
///
/// Uses a flat binding list with frame boundaries: a child component pushes
/// a frame, binds its arguments, and pops the frame when it is torn down.
///
/// # Example
///
/// ```
/// use bindref::{make_read_only, Ref, RenderContext, Scope, Value, WriteOutcome};
///
/// let ctx = RenderContext::default();
/// let mut scope = Scope::new();
/// scope.define_value("total_clicks", 3);
///
/// // Child component receives a read-only view of the parent's value
/// scope.push_frame();
/// let parent = scope.get("total_clicks").cloned().unwrap();
/// scope.define("child_click_count", make_read_only(&parent));
///
/// let outcome = scope.set("child_click_count", 4, &ctx).unwrap();
/// assert_eq!(outcome, WriteOutcome::Localized);
/// assert_eq!(scope.read("child_click_count"), Some(Value::Int(4)));
///
/// scope.pop_frame();
/// assert_eq!(scope.read("total_clicks"), Some(Value::Int(3)));
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    /// All bindings in a flat array (most recent at end)
    bindings: Vec<Binding>,

    /// Frame boundaries (indices into bindings)
    /// Each entry marks where a scope begins
    frames: Vec<usize>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            frames: vec![0], // Start with one frame (root scope)
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Frame Management
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a child scope (push a frame).
    pub fn push_frame(&mut self) {
        self.frames.push(self.bindings.len());
    }

    /// Exit the current child scope (pop a frame).
    ///
    /// Removes all bindings defined since the matching `push_frame()`.
    /// Does nothing at the root scope.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            if let Some(boundary) = self.frames.pop() {
                self.bindings.truncate(boundary);
            }
        }
    }

    /// Get the current scope depth (number of frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if we're at the root scope.
    pub fn is_root_scope(&self) -> bool {
        self.frames.len() == 1
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind a reference in the current frame, shadowing outer bindings.
    pub fn define(&mut self, name: impl Into<String>, reference: Ref) {
        self.bindings.push(Binding {
            name: name.into(),
            reference,
            localized: false,
        });
    }

    /// Bind a fresh mutable cell holding `value`.
    pub fn define_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.define(name, Ref::cell(value));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    fn position(&self, name: &str) -> Option<usize> {
        self.bindings.iter().rposition(|b| b.name == name)
    }

    /// Look up the innermost reference bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Ref> {
        self.get_binding(name).map(|b| &b.reference)
    }

    /// Look up the innermost binding for `name`.
    pub fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.position(name).map(|i| &self.bindings[i])
    }

    /// Read the current value bound to `name`.
    pub fn read(&self, name: &str) -> Option<Value> {
        self.get(name).map(Ref::read)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Check if a binding exists in the current (innermost) frame only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        let frame_start = *self.frames.last().unwrap_or(&0);
        self.bindings[frame_start..].iter().any(|b| b.name == name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Write-back
    // ═══════════════════════════════════════════════════════════════════

    /// Write `value` to the innermost binding named `name`.
    ///
    /// The binding's reference is checked for update first. When update is
    /// absent the condition is permanent, so the write is either localized
    /// or rejected according to `ctx.write_policy`; it is never retried
    /// against the original reference. A localized write to a name bound in
    /// an outer frame adds a shadowing binding to the current frame, so it
    /// disappears with that frame.
    ///
    /// # Errors
    ///
    /// - `UndefinedBinding` if no binding has this name
    /// - `NotWritable` if update is absent and the policy is `Reject`
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        ctx: &RenderContext,
    ) -> Result<WriteOutcome, ScopeError> {
        let value = value.into();
        let idx = self.position(name).ok_or_else(|| ScopeError::UndefinedBinding {
            name: name.to_string(),
        })?;
        let binding = &mut self.bindings[idx];

        if let Some(target) = binding.reference.updatable() {
            target.update(value);
            if ctx.trace {
                tracing::trace!(binding = name, reference = %binding.reference.id(), "write propagated");
            }
            return Ok(WriteOutcome::Propagated);
        }

        match ctx.write_policy {
            WritePolicy::Localize => {
                let previous = binding.reference.id();
                let frame_start = *self.frames.last().unwrap_or(&0);
                let local = Binding {
                    name: name.to_string(),
                    reference: Ref::cell(value),
                    localized: true,
                };

                // Outer frames belong to the owner: shadow them, never overwrite
                if idx < frame_start {
                    self.bindings.push(local);
                } else {
                    self.bindings[idx] = local;
                }
                tracing::debug!(binding = name, previous = %previous, "localized write to binding without update");
                Ok(WriteOutcome::Localized)
            }
            WritePolicy::Reject => {
                tracing::debug!(binding = name, reference = %binding.reference.id(), "rejected write to binding without update");
                Err(ScopeError::NotWritable {
                    name: name.to_string(),
                })
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Get all binding names in the current frame.
    pub fn names_in_current_scope(&self) -> Vec<&str> {
        let frame_start = *self.frames.last().unwrap_or(&0);
        self.bindings[frame_start..]
            .iter()
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the scope is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Clear all bindings and frames.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.frames = vec![0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_propagates_through_update() {
        let ctx = RenderContext::default();
        let mut scope = Scope::new();
        let cell = Ref::cell(1);
        scope.define("x", cell.clone());

        assert_eq!(scope.set("x", 2, &ctx), Ok(WriteOutcome::Propagated));
        assert_eq!(cell.read(), Value::Int(2));
        assert!(!scope.get_binding("x").unwrap().localized);
    }

    #[test]
    fn test_set_localizes_constant() {
        let ctx = RenderContext::default();
        let mut scope = Scope::new();
        let constant = Ref::constant(1);
        scope.define("x", constant.clone());

        assert_eq!(scope.set("x", 2, &ctx), Ok(WriteOutcome::Localized));
        assert_eq!(scope.read("x"), Some(Value::Int(2)));
        assert_eq!(constant.read(), Value::Int(1));

        let binding = scope.get_binding("x").unwrap();
        assert!(binding.localized);
        assert!(binding.reference.is_updatable());
    }

    #[test]
    fn test_set_rejects_under_strict_policy() {
        let ctx = RenderContext::strict();
        let mut scope = Scope::new();
        scope.define("x", Ref::constant(1));

        assert_eq!(
            scope.set("x", 2, &ctx),
            Err(ScopeError::NotWritable {
                name: "x".to_string()
            })
        );
        assert_eq!(scope.read("x"), Some(Value::Int(1)));
    }

    #[test]
    fn test_set_undefined() {
        let mut scope = Scope::new();
        assert_eq!(
            scope.set("missing", 1, &RenderContext::default()),
            Err(ScopeError::UndefinedBinding {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_pop_frame_keeps_root() {
        let mut scope = Scope::new();
        scope.pop_frame();
        assert!(scope.is_root_scope());
        assert_eq!(scope.depth(), 1);
    }
}
