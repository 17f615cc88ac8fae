//! Built-in helpers: `readonly` and `mut`

use super::{Helper, HelperArgs, Helpers};
use crate::error::HelperError;
use crate::reference::{make_read_only, ForwardingReference, Ref};

impl Helpers {
    /// Create a registry with the built-in helpers.
    pub fn with_builtins() -> Self {
        let mut helpers = Self::new();
        helpers.load_builtins();
        helpers
    }

    /// Register the built-in helpers into this registry.
    pub fn load_builtins(&mut self) {
        // Capability stripping
        self.define(Helper::new("readonly", 1, helper_readonly));

        // Explicit write handle
        self.define(Helper::new("mut", 1, helper_mut));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Helper Implementations
// ═══════════════════════════════════════════════════════════════════════

fn first_positional<'a>(helper: &str, args: &'a HelperArgs) -> Result<&'a Ref, HelperError> {
    args.at(0).ok_or_else(|| HelperError::Arity {
        helper: helper.to_string(),
        expected: 1,
        got: args.positional.len(),
    })
}

fn helper_readonly(args: &HelperArgs) -> Result<Ref, HelperError> {
    let reference = first_positional("readonly", args)?;
    Ok(make_read_only(reference))
}

fn helper_mut(args: &HelperArgs) -> Result<Ref, HelperError> {
    let reference = first_positional("mut", args)?;
    Ok(ForwardingReference::wrap(reference)?)
}
