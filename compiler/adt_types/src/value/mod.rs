//! Runtime values exchanged with enum methods and the primitive bridge.
//!
//! Heap-backed payloads go through `Heap<T>`, whose constructor is
//! crate-private; outside this crate values are built through factories
//! (`Value::string`, `From` impls) or returned by the registry.

mod enum_value;
mod heap;

use std::fmt;

use adt_ir::{FieldType, Literal};

pub use enum_value::EnumValue;
pub use heap::Heap;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// Result of a method with nothing to return.
    Void,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    /// A value of a registered enum type.
    Enum(EnumValue),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Enum(v) => v.type_name(),
        }
    }

    /// Whether the value fits a declared field or parameter type.
    ///
    /// `Enum(T)` accepts any value whose owning type is named `T`.
    pub fn matches_type(&self, ty: FieldType) -> bool {
        match (ty, self) {
            (FieldType::Any, _)
            | (FieldType::Int, Value::Int(_))
            | (FieldType::Float, Value::Float(_))
            | (FieldType::Str, Value::Str(_))
            | (FieldType::Bool, Value::Bool(_))
            | (FieldType::Void, Value::Void) => true,
            (FieldType::Enum(name), Value::Enum(v)) => v.descriptor().owner == name,
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Value::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the value, keeping it only if it is an enum value.
    pub fn into_enum(self) -> Option<EnumValue> {
        match self {
            Value::Enum(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt::Display::fmt(&Literal::Float(*x), f),
            Value::Str(s) => f.write_str(s),
            Value::Enum(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Enum(v) => fmt::Debug::fmt(v, f),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Value::Enum(v)
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => Value::Int(*n),
            Literal::Str(s) => Value::string(s.as_str()),
            Literal::Float(x) => Value::Float(*x),
        }
    }
}
