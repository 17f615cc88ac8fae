//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),

            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            Value::Object(obj) => fmt::Debug::fmt(obj, f),
        }
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = super::object::VisitGuard::format(self) else {
            return write!(f, "{{<cycle>}}");
        };

        let written = self.with_fields(|fields| {
            write!(f, "{{")?;
            for (i, (k, v)) in fields.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {}: {:?}", k, v)?;
            }
            if !fields.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "}}")
        });

        // Mid-mutation objects cannot be borrowed for display
        written.unwrap_or_else(|| write!(f, "{{<locked>}}"))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is what a template would print, Debug is more detailed
        match self {
            Value::Null => Ok(()),
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Float(n) => write!(f, "{}", n),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}
