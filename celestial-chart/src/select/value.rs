use std::cmp::Ordering;
use std::fmt;

/// A scalar attribute value as seen by selection expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
        }
    }

    /// Equality with integer/float coercion. Values of different kinds are
    /// never equal.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Ordering between two values of compatible kinds.
    ///
    /// Returns `Err(())` when the kinds cannot be ordered against each other,
    /// and `Ok(None)` when they can but the pair is unordered (a NaN).
    pub(crate) fn order(&self, other: &Value) -> Result<Option<Ordering>, ()> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
            (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
            (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
                _ => Err(()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_float_are_equal_when_numerically_equal() {
        assert!(Value::Int(4).matches(&Value::Float(4.0)));
        assert!(Value::Float(4.0).matches(&Value::Int(4)));
        assert!(!Value::Int(4).matches(&Value::Float(4.5)));
    }

    #[test]
    fn different_kinds_never_match() {
        assert!(!Value::from("4").matches(&Value::Int(4)));
        assert!(!Value::Bool(true).matches(&Value::Int(1)));
    }

    #[test]
    fn text_orders_lexically() {
        let a = Value::from("Bellatrix");
        let b = Value::from("Sirius");
        assert_eq!(a.order(&b), Ok(Some(Ordering::Less)));
    }

    #[test]
    fn text_against_number_cannot_be_ordered() {
        assert_eq!(Value::from("x").order(&Value::Float(1.0)), Err(()));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(Value::Float(f64::NAN).order(&Value::Float(1.0)), Ok(None));
    }
}
