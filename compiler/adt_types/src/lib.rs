//! ADT Types - declarations, validation, registry and values of tagged enums.
//!
//! A declaration flows through three stages:
//! 1. `EnumDeclaration` is built by a front-end (or the fluent builders here)
//! 2. `DeclarationChecker` validates it once, first failure wins
//! 3. `TypeRegistry::register` freezes it into an `EnumType` with immutable
//!    `VariantDescriptor`s and eagerly allocated unit singletons
//!
//! After registration everything reachable from a `SharedEnumType` is
//! read-only, so readers on any thread hold `Heap` handles without locking.
//!
//! # Value identity
//!
//! `EnumValue` is a handle to a heap record. Unit and primitive-backed
//! variants have exactly one record per descriptor; associated variants get a
//! fresh record per construction. `EnumValue::is_identical` compares records
//! by address, `PartialEq` compares tag and fields.

mod check;
mod construct;
mod decl;
mod ids;
mod interface;
mod registry;
mod value;

pub use check::DeclarationChecker;
pub use construct::{make_associated, Args};
pub use decl::{
    ConstructorDecl, EnumDeclaration, EnumDeclarationBuilder, FieldDecl, MethodContext,
    NativeMethod, SharedMethodDecl, StringHook, VariantBuilder, VariantDecl, VariantDeclKind,
    VariantMethodDecl,
};
pub use ids::{TypeId, VariantId};
pub use interface::{InterfaceDecl, InterfaceDeclBuilder, InterfaceRegistry};
pub use registry::{
    make_unit, EnumFlags, EnumType, FieldDef, SharedDescriptor, SharedEnumType, SharedMethod,
    TypeRegistry, VariantDescriptor, VariantKind, VariantMethod,
};
pub use value::{EnumValue, Heap, Value};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{EnumValue, Value};
    adt_ir::static_assert_size!(EnumValue, 8);
    // f64/i64 payload + discriminant.
    adt_ir::static_assert_size!(Value, 16);
}
