//! Terminal references: a mutable value cell and a constant

use std::cell::RefCell;

use super::{RefId, Reference, UpdatableReference};
use crate::value::Value;

/// A mutable reference owning its value.
///
/// This is the simplest write target: `update` replaces the stored value and
/// every later `read` returns it.
#[derive(Debug)]
pub struct ValueCell {
    id: RefId,
    value: RefCell<Value>,
}

impl ValueCell {
    /// Create a cell holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: RefId::next(),
            value: RefCell::new(value.into()),
        }
    }
}

impl Reference for ValueCell {
    fn id(&self) -> RefId {
        self.id
    }

    fn read(&self) -> Value {
        self.value.borrow().clone()
    }
}

impl UpdatableReference for ValueCell {
    fn update(&self, value: Value) {
        *self.value.borrow_mut() = value;
    }
}

/// An immutable reference to a fixed value.
#[derive(Debug)]
pub struct ConstReference {
    id: RefId,
    value: Value,
}

impl ConstReference {
    /// Create a constant reference to `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: RefId::next(),
            value: value.into(),
        }
    }
}

impl Reference for ConstReference {
    fn id(&self) -> RefId {
        self.id
    }

    fn read(&self) -> Value {
        self.value.clone()
    }
}
