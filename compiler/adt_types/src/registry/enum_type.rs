//! A registered enum type.

use adt_ir::{BackingKind, Literal, LiteralKey, MethodSig, Name, StringInterner};
use rustc_hash::FxHashMap;

use super::{EnumFlags, FieldDef, SharedDescriptor, VariantDescriptor, VariantKind, VariantMethod};
use crate::decl::{EnumDeclaration, NativeMethod, VariantDeclKind};
use crate::ids::{TypeId, VariantId};
use crate::value::{EnumValue, Heap};

/// Shared handle to a registered type.
pub type SharedEnumType = Heap<EnumType>;

/// A method declared on the type itself.
#[derive(Clone, Debug)]
pub struct SharedMethod {
    pub sig: MethodSig,
    /// `None` for abstract methods.
    pub body: Option<NativeMethod>,
}

impl SharedMethod {
    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }
}

/// A validated, frozen enum type.
///
/// Built only by `TypeRegistry::register`; immutable afterwards.
#[derive(Debug)]
pub struct EnumType {
    pub id: TypeId,
    pub name: Name,
    pub label: &'static str,
    pub backing: BackingKind,
    pub flags: EnumFlags,
    variants: Vec<SharedDescriptor>,
    /// Variant name -> declaration index.
    variant_index: FxHashMap<Name, usize>,
    /// Per declaration index; `None` for associated variants.
    singletons: Vec<Option<EnumValue>>,
    /// Backing literal -> declaration index.
    literal_index: FxHashMap<LiteralKey, usize>,
    /// Transitive closure of declared interfaces.
    interfaces: Vec<Name>,
    shared_methods: FxHashMap<Name, SharedMethod>,
}

impl EnumType {
    /// Freeze a validated declaration. Allocates every singleton.
    pub(crate) fn build(
        decl: EnumDeclaration,
        interfaces: Vec<Name>,
        interner: &StringInterner,
    ) -> Self {
        let EnumDeclaration {
            name,
            backing,
            variants: variant_decls,
            shared_methods: shared_decls,
            string_hook: type_hook,
            ..
        } = decl;

        let id = TypeId::fresh();
        let owner_label = interner.lookup_static(name);
        let mut flags = EnumFlags::empty();
        if !shared_decls.is_empty() {
            flags |= EnumFlags::SHARED_METHODS;
        }
        if type_hook.is_some() {
            flags |= EnumFlags::STRING_HOOK;
        }

        let mut variants = Vec::with_capacity(variant_decls.len());
        let mut variant_index = FxHashMap::default();
        let mut singletons = Vec::with_capacity(variant_decls.len());
        let mut literal_index = FxHashMap::default();

        for (index, v) in variant_decls.into_iter().enumerate() {
            let kind = match v.kind {
                VariantDeclKind::Unit => {
                    flags |= EnumFlags::UNIT;
                    VariantKind::Unit
                }
                VariantDeclKind::Associated(fields) => {
                    flags |= EnumFlags::ASSOCIATED;
                    VariantKind::Associated(
                        fields
                            .into_iter()
                            .map(|f| FieldDef {
                                name: f.name,
                                label: interner.lookup_static(f.name),
                                ty: f.ty,
                                visibility: f.visibility,
                            })
                            .collect(),
                    )
                }
                VariantDeclKind::PrimitiveBacked(literal) => {
                    flags |= EnumFlags::BACKED;
                    literal_index.insert(literal.key(), index);
                    VariantKind::PrimitiveBacked(literal)
                }
            };

            let mut methods = FxHashMap::default();
            for m in v.methods {
                if m.exclusive {
                    flags |= EnumFlags::EXCLUSIVE_METHODS;
                }
                methods.insert(
                    m.sig.name,
                    VariantMethod {
                        sig: m.sig,
                        body: m.body,
                        exclusive: m.exclusive,
                    },
                );
            }

            if v.string_hook.is_some() {
                flags |= EnumFlags::STRING_HOOK;
            }

            let descriptor = Heap::new(VariantDescriptor {
                id: VariantId::new(id, index),
                name: v.name,
                owner: name,
                label: interner.lookup_static(v.name),
                owner_label,
                kind,
                methods,
                string_hook: v.string_hook.or_else(|| type_hook.clone()),
            });

            singletons.push(
                descriptor
                    .is_singleton()
                    .then(|| EnumValue::new(descriptor.clone(), Box::default())),
            );
            variant_index.insert(v.name, index);
            variants.push(descriptor);
        }

        tracing::debug!(
            type_name = owner_label,
            singletons = singletons.iter().flatten().count(),
            "allocated singletons"
        );

        let shared_methods = shared_decls
            .into_iter()
            .map(|m| {
                (
                    m.sig.name,
                    SharedMethod {
                        sig: m.sig,
                        body: m.body,
                    },
                )
            })
            .collect();

        EnumType {
            id,
            name,
            label: owner_label,
            backing,
            flags,
            variants,
            variant_index,
            singletons,
            literal_index,
            interfaces,
            shared_methods,
        }
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> &[SharedDescriptor] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn variant(&self, name: Name) -> Option<&SharedDescriptor> {
        self.variant_index.get(&name).map(|&i| &self.variants[i])
    }

    /// The singleton of a unit or primitive-backed variant.
    pub fn singleton(&self, name: Name) -> Option<&EnumValue> {
        let index = *self.variant_index.get(&name)?;
        self.singleton_at(index)
    }

    pub fn singleton_at(&self, index: usize) -> Option<&EnumValue> {
        self.singletons.get(index)?.as_ref()
    }

    /// The singleton backed by `literal`, if any.
    pub fn singleton_for(&self, literal: &Literal) -> Option<&EnumValue> {
        let index = *self.literal_index.get(&literal.key())?;
        self.singleton_at(index)
    }

    /// Whether this type owns the descriptor.
    pub fn owns(&self, descriptor: &VariantDescriptor) -> bool {
        descriptor.id.owner() == self.id
    }

    #[inline]
    pub fn is_primitive_backed(&self) -> bool {
        self.backing.is_backed()
    }

    /// Interfaces implemented, super-interfaces included.
    pub fn interfaces(&self) -> &[Name] {
        &self.interfaces
    }

    pub fn implements(&self, interface: Name) -> bool {
        self.interfaces.contains(&interface)
    }

    pub fn shared_method(&self, name: Name) -> Option<&SharedMethod> {
        self.shared_methods.get(&name)
    }

    pub fn shared_methods(&self) -> impl Iterator<Item = &SharedMethod> {
        self.shared_methods.values()
    }
}
