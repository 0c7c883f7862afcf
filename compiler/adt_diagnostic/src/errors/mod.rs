//! Error families of the tagged-enum runtime.
//!
//! Every kind carries structured data (names are resolved to `String` when
//! the error is built, so errors never borrow the interner) and maps to one
//! stable `ErrorCode`. Errors are surfaced synchronously to the immediate
//! caller; none is recovered or retried internally.

use thiserror::Error;

use crate::ErrorCode;

/// Raised only at registration time; fatal to that declaration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("enum type `{type_name}` is already registered")]
    DuplicateType { type_name: String },

    #[error("enum `{type_name}` declares variant `{variant}` more than once")]
    DuplicateVariant { type_name: String, variant: String },

    #[error("enum `{type_name}` declares no variants")]
    NoVariants { type_name: String },

    #[error("variant `{type_name}::{variant}` has no {backing} literal but the type is {backing}-backed")]
    MissingBackingValue {
        type_name: String,
        variant: String,
        backing: String,
    },

    #[error("variant `{type_name}::{variant}` has a literal but `{type_name}` is not primitive-backed")]
    UnexpectedBackingValue { type_name: String, variant: String },

    #[error("variant `{type_name}::{variant}` has a {found} literal, expected {expected}")]
    BackingTypeMismatch {
        type_name: String,
        variant: String,
        expected: String,
        found: String,
    },

    #[error("variants `{first}` and `{second}` of `{type_name}` share the literal `{literal}`")]
    DuplicateBackingValue {
        type_name: String,
        literal: String,
        first: String,
        second: String,
    },

    #[error("variant `{type_name}::{variant}` has literal `{literal}`, which cannot back a variant")]
    InvalidBackingLiteral {
        type_name: String,
        variant: String,
        literal: String,
    },

    #[error("enum `{type_name}` mixes unit variant `{unit}` with associated variant `{associated}`")]
    MixedVariantKinds {
        type_name: String,
        unit: String,
        associated: String,
    },

    #[error("enum `{type_name}` declares field `{field}` of its own; only variants carry fields")]
    TypeLevelFields { type_name: String, field: String },

    #[error("variant `{type_name}::{variant}` declares field `{field}` more than once")]
    DuplicateField {
        type_name: String,
        variant: String,
        field: String,
    },

    #[error("method `{method}` is declared more than once on `{owner}`")]
    DuplicateMethod { owner: String, method: String },

    #[error("method `{method}` on `{owner}` is `{found}`, but `{type_name}` declares it as `{expected}`")]
    SignatureMismatch {
        type_name: String,
        owner: String,
        method: String,
        expected: String,
        found: String,
    },

    #[error("variant `{type_name}::{variant}` does not implement `{method}`")]
    IncompleteVariantMethod {
        type_name: String,
        variant: String,
        method: String,
    },

    #[error("`{owner}` refers to unknown interface `{interface}`")]
    UnknownInterface { owner: String, interface: String },

    #[error("interface `{interface}` is already registered")]
    DuplicateInterface { interface: String },

    #[error("variant `{type_name}::{variant}` does not provide `{method}` required by interface `{interface}`")]
    InterfaceConformance {
        type_name: String,
        interface: String,
        variant: String,
        method: String,
    },

    #[error("`{type_name}` declares `{found}`, but interface `{interface}` requires `{expected}`")]
    InterfaceSignatureMismatch {
        type_name: String,
        interface: String,
        expected: String,
        found: String,
    },

    #[error("variant `{type_name}::{variant}` declares an explicit constructor; list its fields instead")]
    ExplicitConstructor { type_name: String, variant: String },

    #[error("`{owner}` overrides string conversion, but `{type_name}` is primitive-backed")]
    StringHookOnBackedEnum { type_name: String, owner: String },
}

impl DeclarationError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateType { .. } => ErrorCode::E1001,
            Self::DuplicateVariant { .. } => ErrorCode::E1002,
            Self::NoVariants { .. } => ErrorCode::E1003,
            Self::MissingBackingValue { .. } => ErrorCode::E1004,
            Self::UnexpectedBackingValue { .. } => ErrorCode::E1005,
            Self::BackingTypeMismatch { .. } => ErrorCode::E1006,
            Self::DuplicateBackingValue { .. } => ErrorCode::E1007,
            Self::InvalidBackingLiteral { .. } => ErrorCode::E1008,
            Self::TypeLevelFields { .. } => ErrorCode::E1009,
            Self::DuplicateField { .. } => ErrorCode::E1010,
            Self::DuplicateMethod { .. } => ErrorCode::E1011,
            Self::SignatureMismatch { .. } => ErrorCode::E1012,
            Self::IncompleteVariantMethod { .. } => ErrorCode::E1013,
            Self::UnknownInterface { .. } => ErrorCode::E1014,
            Self::InterfaceConformance { .. } => ErrorCode::E1015,
            Self::InterfaceSignatureMismatch { .. } => ErrorCode::E1016,
            Self::ExplicitConstructor { .. } => ErrorCode::E1017,
            Self::StringHookOnBackedEnum { .. } => ErrorCode::E1018,
            Self::DuplicateInterface { .. } => ErrorCode::E1019,
            Self::MixedVariantKinds { .. } => ErrorCode::E1020,
        }
    }
}

/// Raised per construction call; never corrupts registry state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("`{variant}` expects {expected} field value{}, got {got}", plural(.expected))]
    Arity {
        variant: String,
        expected: usize,
        got: usize,
    },

    #[error("field `{field}` of `{variant}` expects {expected}, got {got}")]
    FieldType {
        variant: String,
        field: String,
        expected: String,
        got: String,
    },

    #[error("`{variant}` has no field named `{field}`")]
    UnknownField { variant: String, field: String },

    #[error("field `{field}` of `{variant}` is given more than once")]
    DuplicateArgument { variant: String, field: String },

    #[error("`{variant}` carries no associated fields and cannot be constructed")]
    NotConstructible { variant: String },

    #[error("`{variant}` carries associated fields; construct it with field values")]
    NotUnit { variant: String },
}

impl ConstructionError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Arity { .. } => ErrorCode::E2001,
            Self::FieldType { .. } => ErrorCode::E2002,
            Self::UnknownField { .. } => ErrorCode::E2003,
            Self::DuplicateArgument { .. } => ErrorCode::E2004,
            Self::NotConstructible { .. } => ErrorCode::E2005,
            Self::NotUnit { .. } => ErrorCode::E2006,
        }
    }
}

/// Raised on registry and primitive-bridge queries; caller-recoverable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no variant of `{type_name}` is backed by `{literal}`")]
    NoMatchingVariant { type_name: String, literal: String },

    #[error("`{type_name}` is not primitive-backed")]
    NotPrimitiveBacked { type_name: String },

    #[error("no enum type named `{type_name}`")]
    UnknownType { type_name: String },

    #[error("`{type_name}` has no variant named `{variant}`")]
    UnknownVariant { type_name: String, variant: String },

    #[error("`{type_name}` has associated-value variants and cannot be enumerated")]
    NotEnumerable { type_name: String },

    #[error("cannot coerce `{value}` to {expected}")]
    CoercionMismatch { value: String, expected: String },
}

impl LookupError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoMatchingVariant { .. } => ErrorCode::E3001,
            Self::NotPrimitiveBacked { .. } => ErrorCode::E3002,
            Self::UnknownType { .. } => ErrorCode::E3003,
            Self::UnknownVariant { .. } => ErrorCode::E3004,
            Self::NotEnumerable { .. } => ErrorCode::E3005,
            Self::CoercionMismatch { .. } => ErrorCode::E3006,
        }
    }
}

/// Raised during invocation or match evaluation; never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no method `{method}` on `{type_name}::{variant}`")]
    NoSuchMethod {
        type_name: String,
        variant: String,
        method: String,
    },

    #[error("non-exhaustive match: no arm covers `{type_name}::{variant}`")]
    NonExhaustiveMatch { type_name: String, variant: String },

    #[error("`{method}` expects {expected} argument{}, got {got}", plural(.expected))]
    ArgCount {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("argument {index} of `{method}` expects {expected}, got {got}")]
    ArgType {
        method: String,
        index: usize,
        expected: String,
        got: String,
    },

    #[error("{reason}")]
    MatchKindMismatch { reason: String },

    #[error("method call depth exceeded the limit of {limit}")]
    CallDepthExceeded { limit: usize },

    #[error("`{method}` failed: {message}")]
    MethodFailed { method: String, message: String },
}

impl DispatchError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoSuchMethod { .. } => ErrorCode::E4001,
            Self::NonExhaustiveMatch { .. } => ErrorCode::E4002,
            Self::ArgCount { .. } => ErrorCode::E4003,
            Self::ArgType { .. } => ErrorCode::E4004,
            Self::MatchKindMismatch { .. } => ErrorCode::E4005,
            Self::CallDepthExceeded { .. } => ErrorCode::E4006,
            Self::MethodFailed { .. } => ErrorCode::E4007,
        }
    }
}

/// Any runtime error.
///
/// Native method bodies return this type so they can propagate every family
/// with `?`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdtError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl AdtError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Declaration(e) => e.code(),
            Self::Construction(e) => e.code(),
            Self::Lookup(e) => e.code(),
            Self::Dispatch(e) => e.code(),
        }
    }

    /// Report a failure from inside a method body.
    pub fn method_failed(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Dispatch(DispatchError::MethodFailed {
            method: method.into(),
            message: message.into(),
        })
    }
}

/// Result alias for operations that may fail with any family.
pub type AdtResult<T> = Result<T, AdtError>;

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes format arguments by reference"
)]
fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}
