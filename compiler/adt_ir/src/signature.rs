//! Field types and method signatures.

use crate::{Name, StringLookup};

/// Shape of an associated field, a method parameter, or a method result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Str,
    Bool,
    /// A value of the named enum type.
    Enum(Name),
    /// Accepts any value.
    Any,
    /// No value; only meaningful as a return type.
    Void,
}

impl FieldType {
    /// Render the type for diagnostics.
    pub fn display(self, interner: &impl StringLookup) -> String {
        match self {
            Self::Int => "int".to_owned(),
            Self::Float => "float".to_owned(),
            Self::Str => "str".to_owned(),
            Self::Bool => "bool".to_owned(),
            Self::Enum(name) => interner.lookup(name).to_owned(),
            Self::Any => "any".to_owned(),
            Self::Void => "void".to_owned(),
        }
    }
}

/// A method signature: name, ordered parameter types, and return type.
///
/// Two signatures are homogeneous iff all three parts are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSig {
    pub name: Name,
    pub params: Vec<FieldType>,
    pub ret: FieldType,
}

impl MethodSig {
    /// Create a signature.
    pub fn new(name: Name, params: Vec<FieldType>, ret: FieldType) -> Self {
        Self { name, params, ret }
    }

    /// Number of declared parameters (receiver excluded).
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render as `name(int, str) -> bool` for diagnostics.
    pub fn display(&self, interner: &impl StringLookup) -> String {
        let params: Vec<String> = self.params.iter().map(|p| p.display(interner)).collect();
        format!(
            "{}({}) -> {}",
            interner.lookup(self.name),
            params.join(", "),
            self.ret.display(interner)
        )
    }
}

/// Visibility of an associated field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Readable by any caller.
    #[default]
    Public,

    /// Readable only by the enum's own methods.
    Private,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn signature_display_names_every_part() {
        let interner = StringInterner::new();
        let suit = interner.intern("Suit");
        let sig = MethodSig::new(
            interner.intern("pair_with"),
            vec![FieldType::Enum(suit), FieldType::Int],
            FieldType::Void,
        );
        assert_eq!(sig.arity(), 2);
        assert_eq!(sig.display(&interner), "pair_with(Suit, int) -> void");
    }

    #[test]
    fn homogeneity_is_structural() {
        let interner = StringInterner::new();
        let name = interner.intern("color");
        let a = MethodSig::new(name, vec![], FieldType::Str);
        let b = MethodSig::new(name, vec![], FieldType::Str);
        let c = MethodSig::new(name, vec![FieldType::Any], FieldType::Str);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
