//! Render context configuration

/// What a scope does when a write targets a binding without update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Rebind the name locally to a fresh cell; the owner is untouched.
    #[default]
    Localize,

    /// Fail the write with `ScopeError::NotWritable`.
    Reject,
}

/// Configuration for binding writes during a render pass.
///
/// This is passed to every scope write and controls how missing update
/// capabilities are handled.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Policy for writes to bindings that cannot be updated
    pub write_policy: WritePolicy,

    /// Whether to emit a trace event per binding write (for debugging)
    pub trace: bool,
}

impl RenderContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a specific write policy.
    pub fn with_write_policy(write_policy: WritePolicy) -> Self {
        Self {
            write_policy,
            ..Default::default()
        }
    }

    /// Create a strict context that rejects writes to read-only bindings.
    pub fn strict() -> Self {
        Self::with_write_policy(WritePolicy::Reject)
    }

    /// Enable or disable per-write tracing (builder pattern).
    pub fn traced(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
