//! Primitive backing of enum variants.
//!
//! A primitive-backed enum maps every variant to exactly one `Literal` of the
//! type's `BackingKind`. `LiteralKey` is the hashable projection used for the
//! literal-to-variant index.

use std::fmt;

/// Backing primitive of an enum type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackingKind {
    /// Not backed: variants are unit or carry associated fields.
    #[default]
    None,
    /// Backed by 64-bit integers.
    Int,
    /// Backed by strings.
    String,
    /// Backed by 64-bit floats.
    Float,
}

impl BackingKind {
    /// The backing kind a literal belongs to.
    #[inline]
    pub fn of(literal: &Literal) -> Self {
        literal.kind()
    }

    /// Whether a literal has this backing kind.
    #[inline]
    pub fn accepts(self, literal: &Literal) -> bool {
        literal.kind() == self
    }

    /// Whether this is a primitive-backed kind.
    #[inline]
    pub fn is_backed(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human-readable name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int => "int",
            Self::String => "string",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive literal attached to a primitive-backed variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Float(f64),
}

impl Literal {
    /// Create a string literal.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// The backing kind of this literal.
    #[inline]
    pub fn kind(&self) -> BackingKind {
        match self {
            Self::Int(_) => BackingKind::Int,
            Self::Str(_) => BackingKind::String,
            Self::Float(_) => BackingKind::Float,
        }
    }

    /// Whether this literal can be used as a backing value at all.
    ///
    /// NaN never compares equal to itself, so it could not round-trip
    /// through `from`.
    #[inline]
    pub fn is_valid_backing(&self) -> bool {
        !matches!(self, Self::Float(f) if f.is_nan())
    }

    /// The hashable key for this literal.
    pub fn key(&self) -> LiteralKey {
        match self {
            Self::Int(n) => LiteralKey::Int(*n),
            Self::Str(s) => LiteralKey::Str(s.clone()),
            // -0.0 and 0.0 compare equal, so they share one key.
            Self::Float(f) if *f == 0.0 => LiteralKey::Float(0.0f64.to_bits()),
            Self::Float(f) => LiteralKey::Float(f.to_bits()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Hashable projection of a `Literal`.
///
/// Floats are stored as bits for Hash compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKey {
    Int(i64),
    Str(String),
    Float(u64),
}
