//! Helper dispatch: named functions from argument references to a reference

mod builtins;

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::HelperError;
use crate::reference::Ref;

/// Type alias for helper function pointers
pub type HelperFnPtr = Rc<dyn Fn(&HelperArgs) -> Result<Ref, HelperError>>;

/// Arguments to a helper invocation, already resolved to references.
#[derive(Debug, Clone, Default)]
pub struct HelperArgs {
    /// Positional arguments in call order
    pub positional: Vec<Ref>,
}

impl HelperArgs {
    /// Create arguments from positional references
    pub fn positional(positional: Vec<Ref>) -> Self {
        Self { positional }
    }

    /// Get a positional argument by index
    pub fn at(&self, index: usize) -> Option<&Ref> {
        self.positional.get(index)
    }
}

/// A named helper.
#[derive(Clone)]
pub struct Helper {
    /// Helper name as written in templates
    pub name: String,

    /// Required positional count
    pub arity: usize,

    /// The helper implementation
    pub func: HelperFnPtr,
}

impl Helper {
    /// Create a helper with a fixed positional arity.
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        func: impl Fn(&HelperArgs) -> Result<Ref, HelperError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Rc::new(func),
        }
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Helper({})", self.name)
    }
}

/// Registry of helpers available to templates.
///
/// # Example
///
/// ```
/// use bindref::{HelperArgs, Helpers, Ref, Value};
///
/// let helpers = Helpers::with_builtins();
/// let total_clicks = Ref::cell(3);
///
/// let child = helpers
///     .invoke("readonly", &HelperArgs::positional(vec![total_clicks.clone()]))
///     .unwrap();
///
/// assert_eq!(child.read(), Value::Int(3));
/// assert!(!child.is_updatable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Helpers {
    helpers: IndexMap<String, Helper>,
}

impl Helpers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a helper, replacing any helper with the same name.
    pub fn define(&mut self, helper: Helper) {
        self.helpers.insert(helper.name.clone(), helper);
    }

    /// Look up a helper by name.
    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.helpers.get(name)
    }

    /// Check if a helper is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Registered helper names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.helpers.keys().map(String::as_str).collect()
    }

    /// Invoke a helper by name.
    ///
    /// # Errors
    ///
    /// - `UnknownHelper` if no helper has this name
    /// - `Arity` if the positional count does not match
    /// - whatever the helper itself returns
    pub fn invoke(&self, name: &str, args: &HelperArgs) -> Result<Ref, HelperError> {
        let helper = self.get(name).ok_or_else(|| HelperError::UnknownHelper {
            name: name.to_string(),
        })?;

        if args.positional.len() != helper.arity {
            return Err(HelperError::Arity {
                helper: helper.name.clone(),
                expected: helper.arity,
                got: args.positional.len(),
            });
        }

        tracing::trace!(helper = name, positional = args.positional.len(), "invoking helper");
        (helper.func)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_unknown_helper() {
        let helpers = Helpers::new();
        let err = helpers.invoke("nope", &HelperArgs::default()).unwrap_err();
        assert_eq!(
            err,
            HelperError::UnknownHelper {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_custom_helper() {
        let mut helpers = Helpers::new();
        helpers.define(Helper::new("second", 2, |args| {
            Ok(args.at(1).cloned().unwrap_or_else(|| Ref::constant(Value::Null)))
        }));

        let args = HelperArgs::positional(vec![Ref::cell(1), Ref::cell(2)]);
        assert_eq!(helpers.invoke("second", &args).unwrap().read(), Value::Int(2));
        assert!(helpers.invoke("second", &HelperArgs::default()).is_err());
    }
}
