//! Declaration records handed to the registry.
//!
//! An `EnumDeclaration` is what a front-end produces for one `enum` block:
//! it is plain data, unvalidated, and consumed by `TypeRegistry::register`.
//! `EnumDeclaration::builder` offers a fluent way to write one by hand.

mod builder;
mod native;

use adt_ir::{BackingKind, FieldType, Literal, MethodSig, Name, Visibility};

pub use builder::{EnumDeclarationBuilder, VariantBuilder};
pub use native::{MethodContext, NativeMethod, StringHook};

/// An enum type as written by its author.
#[derive(Clone, Debug)]
pub struct EnumDeclaration {
    pub name: Name,
    pub backing: BackingKind,
    /// Variants in declaration order.
    pub variants: Vec<VariantDecl>,
    /// Shared and abstract methods declared on the type itself.
    pub shared_methods: Vec<SharedMethodDecl>,
    /// Interfaces the type claims to implement.
    pub interfaces: Vec<Name>,
    /// Fields declared on the type rather than on a variant. Always rejected.
    pub properties: Vec<FieldDecl>,
    /// Type-level string conversion override.
    pub string_hook: Option<StringHook>,
}

/// One variant as written.
#[derive(Clone, Debug)]
pub struct VariantDecl {
    pub name: Name,
    pub kind: VariantDeclKind,
    pub methods: Vec<VariantMethodDecl>,
    pub string_hook: Option<StringHook>,
    /// An explicit constructor body, which the checker rejects.
    pub constructor: Option<ConstructorDecl>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VariantDeclKind {
    Unit,
    /// Promoted fields, in order.
    Associated(Vec<FieldDecl>),
    PrimitiveBacked(Literal),
}

/// A promoted field of an associated variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: FieldType,
    pub visibility: Visibility,
}

#[derive(Clone, Debug)]
pub struct VariantMethodDecl {
    pub sig: MethodSig,
    pub body: NativeMethod,
    /// Available on this variant only; exempt from coverage checking.
    pub exclusive: bool,
}

/// A method on the type: `Some(body)` is shared, `None` is abstract and
/// must be implemented by every variant.
#[derive(Clone, Debug)]
pub struct SharedMethodDecl {
    pub sig: MethodSig,
    pub body: Option<NativeMethod>,
}

impl SharedMethodDecl {
    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }
}

/// Parameters of a hand-written variant constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub params: Vec<Name>,
}
