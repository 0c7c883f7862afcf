//! ADT IR - shared vocabulary for the tagged-enum runtime.
//!
//! This crate holds the small, copyable data that every other layer speaks:
//! - `Name`: interned identifiers for types, variants, fields and methods
//! - `StringInterner` / `SharedInterner`: the process-wide name table
//! - `BackingKind` / `Literal`: primitive backing of enum variants
//! - `FieldType` / `MethodSig`: field shapes and method signatures
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)` so that variant and
//!   method lookups compare integers, never strings.
//! - **Hashable literals**: floats are keyed by their bit pattern
//!   (`LiteralKey`) so literal tables can live in hash maps.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod literal;
mod name;
mod signature;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use literal::{BackingKind, Literal, LiteralKey};
pub use name::Name;
pub use signature::{FieldType, MethodSig, Visibility};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{FieldType, Name};
    static_assert_size!(Name, 4);
    // Enum(Name) dominates: discriminant + Name (4).
    static_assert_size!(FieldType, 8);
}
