//! Value representation for rendered values

mod display;
mod impls;
mod object;

pub use object::ObjectValue;

use std::rc::Rc;

/// A value produced by reading a reference.
///
/// Values are organized into two tiers:
/// - Tier 1: Inline scalars (no allocation)
/// - Tier 2: Heap-allocated values (Rc-wrapped)
///
/// Scalars, strings and lists are immutable once built. `Object` is the
/// exception: it is a shared map that anyone holding it may mutate, which is
/// why revoking a reference's update does not freeze the object it yields.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// Absent value
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Values
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Rc<String>),

    /// Ordered list of values
    List(Rc<Vec<Value>>),

    /// Shared, mutable keyed object
    Object(ObjectValue),
}
