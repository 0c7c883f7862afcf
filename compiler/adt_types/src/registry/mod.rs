//! Enum type registry.
//!
//! Process-wide store of registered enum types, indexed by name and by
//! `TypeId`. Registration is serialized per name through the `DashMap`
//! entry lock: the declaration is validated and frozen while the name's
//! slot is held, so a concurrent registration of the same name observes
//! the finished type and fails with `DuplicateType`. Readers take a shard
//! read lock just long enough to clone a `Heap` handle.

mod descriptor;
mod enum_type;
mod flags;

use adt_diagnostic::{AdtResult, ConstructionError, DeclarationError, LookupError};
use adt_ir::{Name, SharedInterner};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::check::DeclarationChecker;
use crate::decl::EnumDeclaration;
use crate::ids::TypeId;
use crate::interface::{InterfaceDecl, InterfaceRegistry};
use crate::value::{EnumValue, Heap};

pub use descriptor::{FieldDef, SharedDescriptor, VariantDescriptor, VariantKind, VariantMethod};
pub use enum_type::{EnumType, SharedEnumType, SharedMethod};
pub use flags::EnumFlags;

/// Registry of enum types and interfaces.
pub struct TypeRegistry {
    interner: SharedInterner,
    by_name: DashMap<Name, SharedEnumType, FxBuildHasher>,
    by_id: DashMap<TypeId, SharedEnumType, FxBuildHasher>,
    interfaces: RwLock<InterfaceRegistry>,
}

impl TypeRegistry {
    pub fn new(interner: SharedInterner) -> Self {
        TypeRegistry {
            interner,
            by_name: DashMap::with_hasher(FxBuildHasher),
            by_id: DashMap::with_hasher(FxBuildHasher),
            interfaces: RwLock::new(InterfaceRegistry::new()),
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Validate and register a declaration.
    ///
    /// On success every singleton exists before the type becomes visible;
    /// on failure nothing is stored.
    #[tracing::instrument(level = "debug", skip_all, fields(
        type_name = self.interner.lookup(decl.name),
        variants = decl.variants.len(),
    ))]
    pub fn register(&self, decl: EnumDeclaration) -> Result<SharedEnumType, DeclarationError> {
        let label = self.interner.lookup(decl.name);
        match self.by_name.entry(decl.name) {
            Entry::Occupied(_) => {
                tracing::debug!("rejected duplicate type");
                Err(DeclarationError::DuplicateType {
                    type_name: label.to_owned(),
                })
            }
            Entry::Vacant(slot) => {
                let interfaces = {
                    let registry = self.interfaces.read();
                    DeclarationChecker::new(&self.interner, &registry).check(&decl)?
                };
                let ty = Heap::new(EnumType::build(decl, interfaces, &self.interner));
                self.by_id.insert(ty.id, ty.clone());
                slot.insert(ty.clone());
                tracing::debug!(type_id = ty.id.raw(), "registered enum type");
                Ok(ty)
            }
        }
    }

    /// Register an interface for later conformance checks.
    pub fn register_interface(&self, decl: InterfaceDecl) -> Result<(), DeclarationError> {
        self.interfaces.write().register(decl, &*self.interner)
    }

    /// A registered interface, by name.
    pub fn interface(&self, name: &str) -> Option<InterfaceDecl> {
        let name = self.interner.get(name)?;
        self.interfaces.read().get(name).cloned()
    }

    pub fn lookup(&self, name: Name) -> Option<SharedEnumType> {
        self.by_name.get(&name).map(|entry| entry.value().clone())
    }

    pub fn lookup_by_id(&self, id: TypeId) -> Option<SharedEnumType> {
        self.by_id.get(&id).map(|entry| entry.value().clone())
    }

    /// Look up a type by name, failing with `UnknownType`.
    pub fn resolve(&self, type_name: &str) -> Result<SharedEnumType, LookupError> {
        self.interner
            .get(type_name)
            .and_then(|name| self.lookup(name))
            .ok_or_else(|| LookupError::UnknownType {
                type_name: type_name.to_owned(),
            })
    }

    /// Variants of a type in declaration order.
    pub fn list_variants(&self, type_name: &str) -> Result<Vec<SharedDescriptor>, LookupError> {
        Ok(self.resolve(type_name)?.variants().to_vec())
    }

    /// A variant descriptor by type and variant name.
    pub fn variant(&self, type_name: &str, variant: &str) -> Result<SharedDescriptor, LookupError> {
        let ty = self.resolve(type_name)?;
        self.interner
            .get(variant)
            .and_then(|name| ty.variant(name))
            .cloned()
            .ok_or_else(|| LookupError::UnknownVariant {
                type_name: type_name.to_owned(),
                variant: variant.to_owned(),
            })
    }

    /// The singleton of a unit or primitive-backed variant.
    pub fn singleton(&self, type_name: &str, variant: &str) -> AdtResult<EnumValue> {
        let descriptor = self.variant(type_name, variant)?;
        let ty = self.lookup_by_id(descriptor.id.owner()).ok_or_else(|| {
            LookupError::UnknownType {
                type_name: type_name.to_owned(),
            }
        })?;
        Ok(make_unit(&ty, &descriptor)?)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Names of all registered types, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .by_name
            .iter()
            .map(|entry| entry.value().label)
            .collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .field("interfaces", &self.interfaces.read().len())
            .finish_non_exhaustive()
    }
}

/// The pre-allocated singleton of a unit or primitive-backed variant.
pub fn make_unit(
    ty: &EnumType,
    descriptor: &VariantDescriptor,
) -> Result<EnumValue, ConstructionError> {
    ty.owns(descriptor)
        .then(|| ty.singleton_at(descriptor.id.index()))
        .flatten()
        .cloned()
        .ok_or_else(|| ConstructionError::NotUnit {
            variant: descriptor.qualified_name(),
        })
}

#[cfg(test)]
mod tests;
