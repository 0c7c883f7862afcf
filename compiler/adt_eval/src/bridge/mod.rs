//! Primitive bridge.
//!
//! Round trip between primitive-backed enum values and their literals, plus
//! the coercions used when such a value appears in a primitive context
//! (string interpolation, arithmetic). Each variant maps to exactly one
//! literal, so coercion is total and lossless for backed types. Types
//! without a backing primitive are rejected with `NotPrimitiveBacked`.

use std::borrow::Cow;

use adt_diagnostic::LookupError;
use adt_ir::{BackingKind, Literal, LiteralKey};
use adt_types::{EnumType, EnumValue, Value};
use rustc_hash::FxHashMap;

fn not_backed(type_name: &str) -> LookupError {
    LookupError::NotPrimitiveBacked {
        type_name: type_name.to_owned(),
    }
}

fn require_backed(ty: &EnumType) -> Result<(), LookupError> {
    if ty.is_primitive_backed() {
        Ok(())
    } else {
        Err(not_backed(ty.label))
    }
}

/// The variant of `ty` backed by `literal`.
pub fn from_primitive(ty: &EnumType, literal: &Literal) -> Result<EnumValue, LookupError> {
    try_from_primitive(ty, literal)?.ok_or_else(|| LookupError::NoMatchingVariant {
        type_name: ty.label.to_owned(),
        literal: literal.to_string(),
    })
}

/// Like `from_primitive`, but a literal no variant carries is `Ok(None)`.
pub fn try_from_primitive(
    ty: &EnumType,
    literal: &Literal,
) -> Result<Option<EnumValue>, LookupError> {
    require_backed(ty)?;
    Ok(ty.singleton_for(literal).cloned())
}

/// The literal backing `value`.
pub fn to_primitive(value: &EnumValue) -> Result<Literal, LookupError> {
    value
        .literal()
        .cloned()
        .ok_or_else(|| not_backed(value.type_name()))
}

/// All variants of a backed type keyed by literal, in declaration order.
pub fn list(ty: &EnumType) -> Result<PrimitiveListing, LookupError> {
    require_backed(ty)?;
    let mut listing = PrimitiveListing::with_capacity(ty.len());
    for value in cases(ty)? {
        if let Some(literal) = value.literal() {
            listing.push(literal.clone(), value);
        }
    }
    Ok(listing)
}

/// Every singleton of a type in declaration order.
///
/// Types with associated variants have no finite set of values.
pub fn cases(ty: &EnumType) -> Result<Vec<EnumValue>, LookupError> {
    if !ty.flags.is_enumerable() {
        return Err(LookupError::NotEnumerable {
            type_name: ty.label.to_owned(),
        });
    }
    Ok((0..ty.len())
        .filter_map(|index| ty.singleton_at(index).cloned())
        .collect())
}

/// Literal of an enum value in a primitive context, checked against the
/// kind the context requires.
fn coerce_literal(value: &EnumValue, kind: BackingKind) -> Result<&Literal, LookupError> {
    let literal = value.literal().ok_or_else(|| not_backed(value.type_name()))?;
    if kind.accepts(literal) {
        Ok(literal)
    } else {
        Err(mismatch(&Value::Enum(value.clone()), kind))
    }
}

fn mismatch(value: &Value, kind: BackingKind) -> LookupError {
    LookupError::CoercionMismatch {
        value: format!("{value:?}"),
        expected: kind.to_string(),
    }
}

/// An `int`, or an int-backed enum value.
pub fn coerce_int(value: &Value) -> Result<i64, LookupError> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Enum(v) => match coerce_literal(v, BackingKind::Int)? {
            Literal::Int(n) => Ok(*n),
            _ => Err(mismatch(value, BackingKind::Int)),
        },
        _ => Err(mismatch(value, BackingKind::Int)),
    }
}

/// A `float`, or a float-backed enum value.
pub fn coerce_float(value: &Value) -> Result<f64, LookupError> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Enum(v) => match coerce_literal(v, BackingKind::Float)? {
            Literal::Float(x) => Ok(*x),
            _ => Err(mismatch(value, BackingKind::Float)),
        },
        _ => Err(mismatch(value, BackingKind::Float)),
    }
}

/// A `str`, or a string-backed enum value.
pub fn coerce_str(value: &Value) -> Result<Cow<'_, str>, LookupError> {
    match value {
        Value::Str(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Enum(v) => match coerce_literal(v, BackingKind::String)? {
            Literal::Str(s) => Ok(Cow::Borrowed(s.as_str())),
            _ => Err(mismatch(value, BackingKind::String)),
        },
        _ => Err(mismatch(value, BackingKind::String)),
    }
}

/// Concatenate values as string interpolation does.
///
/// Backed enum values contribute their literal; other enum values their
/// string conversion.
pub fn interpolate(parts: &[Value]) -> String {
    parts.iter().map(ToString::to_string).collect()
}

/// Ordered mapping from literal to variant value.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveListing {
    entries: Vec<(Literal, EnumValue)>,
    index: FxHashMap<LiteralKey, usize>,
}

impl PrimitiveListing {
    fn with_capacity(capacity: usize) -> Self {
        PrimitiveListing {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    fn push(&mut self, literal: Literal, value: EnumValue) {
        self.index.insert(literal.key(), self.entries.len());
        self.entries.push((literal, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, literal: &Literal) -> Option<&EnumValue> {
        let index = *self.index.get(&literal.key())?;
        self.entries.get(index).map(|(_, value)| value)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Literal, &EnumValue)> {
        self.entries.iter().map(|(literal, value)| (literal, value))
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.entries.iter().map(|(literal, _)| literal)
    }
}

#[cfg(test)]
mod tests;
