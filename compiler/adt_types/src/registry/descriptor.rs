//! Immutable per-variant metadata.

use adt_ir::{FieldType, Literal, MethodSig, Name, Visibility};
use rustc_hash::FxHashMap;

use crate::decl::{NativeMethod, StringHook};
use crate::ids::VariantId;
use crate::value::Heap;

/// Shared handle to a descriptor. Values and the owning type hold these.
pub type SharedDescriptor = Heap<VariantDescriptor>;

/// One case of an enum type.
///
/// The owner is referenced by name and `TypeId` only, so descriptors never
/// keep their `EnumType` alive.
#[derive(Debug)]
pub struct VariantDescriptor {
    pub id: VariantId,
    pub name: Name,
    pub owner: Name,
    pub label: &'static str,
    pub owner_label: &'static str,
    pub kind: VariantKind,
    /// Methods declared on this variant, keyed by method name.
    pub methods: FxHashMap<Name, VariantMethod>,
    /// Effective string hook: the variant's own, else the type's.
    pub string_hook: Option<StringHook>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VariantKind {
    Unit,
    Associated(Vec<FieldDef>),
    PrimitiveBacked(Literal),
}

/// A promoted field with its name resolved once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: Name,
    pub label: &'static str,
    pub ty: FieldType,
    pub visibility: Visibility,
}

#[derive(Clone, Debug)]
pub struct VariantMethod {
    pub sig: MethodSig,
    pub body: NativeMethod,
    pub exclusive: bool,
}

impl VariantDescriptor {
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, VariantKind::Unit)
    }

    #[inline]
    pub fn is_associated(&self) -> bool {
        matches!(self.kind, VariantKind::Associated(_))
    }

    #[inline]
    pub fn is_primitive_backed(&self) -> bool {
        matches!(self.kind, VariantKind::PrimitiveBacked(_))
    }

    /// Unit and primitive-backed variants have exactly one value.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        !self.is_associated()
    }

    /// Declared fields; empty unless associated.
    pub fn fields(&self) -> &[FieldDef] {
        match &self.kind {
            VariantKind::Associated(fields) => fields,
            _ => &[],
        }
    }

    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    pub fn literal(&self) -> Option<&Literal> {
        match &self.kind {
            VariantKind::PrimitiveBacked(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn method(&self, name: Name) -> Option<&VariantMethod> {
        self.methods.get(&name)
    }

    /// `Type::Variant`, for diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.owner_label, self.label)
    }
}
