//! Declaration validation.
//!
//! Runs once per declaration, before anything is stored. Rules are checked
//! in a fixed order and the first failure is reported:
//!
//! 1. variant names are unique
//! 2. at least one variant
//! 3. backing consistency (all variants backed by distinct literals of the
//!    declared kind, or none backed)
//! 4. associated fields: unique per variant, unit and associated variants
//!    never mixed, none on the type itself
//! 5. method coverage: no duplicates, one signature per method name, every
//!    non-exclusive variant method and every abstract method available on
//!    every variant
//! 6. interface conformance over the `extends` closure
//! 7. no explicit constructors
//! 8. no string hooks on primitive-backed types

use std::collections::hash_map::Entry;

use adt_diagnostic::DeclarationError;
use adt_ir::{LiteralKey, MethodSig, Name, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::decl::{EnumDeclaration, VariantDecl, VariantDeclKind};
use crate::interface::InterfaceRegistry;

/// Signature each method name resolves to across the declaration.
type Canonical<'d> = FxHashMap<Name, &'d MethodSig>;

/// Validates an `EnumDeclaration` against the registered interfaces.
pub struct DeclarationChecker<'a> {
    interner: &'a StringInterner,
    interfaces: &'a InterfaceRegistry,
}

impl<'a> DeclarationChecker<'a> {
    pub fn new(interner: &'a StringInterner, interfaces: &'a InterfaceRegistry) -> Self {
        DeclarationChecker {
            interner,
            interfaces,
        }
    }

    /// Check every rule. Returns the interface closure the type implements.
    #[tracing::instrument(level = "debug", skip_all, fields(
        type_name = self.interner.lookup(decl.name),
    ))]
    pub fn check(&self, decl: &EnumDeclaration) -> Result<Vec<Name>, DeclarationError> {
        self.check_variant_names(decl)?;
        self.check_not_empty(decl)?;
        self.check_backing(decl)?;
        self.check_fields(decl)?;
        let canonical = self.check_methods(decl)?;
        let interfaces = self.check_interfaces(decl, &canonical)?;
        self.check_constructors(decl)?;
        self.check_string_hooks(decl)?;
        Ok(interfaces)
    }

    fn name(&self, name: Name) -> String {
        self.interner.lookup(name).to_owned()
    }

    fn qualified(&self, decl: &EnumDeclaration, variant: &VariantDecl) -> String {
        format!(
            "{}::{}",
            self.interner.lookup(decl.name),
            self.interner.lookup(variant.name)
        )
    }

    fn check_variant_names(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        let mut seen = FxHashSet::default();
        for variant in &decl.variants {
            if !seen.insert(variant.name) {
                return Err(DeclarationError::DuplicateVariant {
                    type_name: self.name(decl.name),
                    variant: self.name(variant.name),
                });
            }
        }
        Ok(())
    }

    fn check_not_empty(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        if decl.variants.is_empty() {
            return Err(DeclarationError::NoVariants {
                type_name: self.name(decl.name),
            });
        }
        Ok(())
    }

    fn check_backing(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        let backed = decl.backing.is_backed();
        let mut seen: FxHashMap<LiteralKey, Name> = FxHashMap::default();

        for variant in &decl.variants {
            match (&variant.kind, backed) {
                (VariantDeclKind::PrimitiveBacked(literal), true) => {
                    if !decl.backing.accepts(literal) {
                        return Err(DeclarationError::BackingTypeMismatch {
                            type_name: self.name(decl.name),
                            variant: self.name(variant.name),
                            expected: decl.backing.to_string(),
                            found: literal.kind().to_string(),
                        });
                    }
                    if !literal.is_valid_backing() {
                        return Err(DeclarationError::InvalidBackingLiteral {
                            type_name: self.name(decl.name),
                            variant: self.name(variant.name),
                            literal: literal.to_string(),
                        });
                    }
                    if let Some(first) = seen.insert(literal.key(), variant.name) {
                        return Err(DeclarationError::DuplicateBackingValue {
                            type_name: self.name(decl.name),
                            literal: literal.to_string(),
                            first: self.name(first),
                            second: self.name(variant.name),
                        });
                    }
                }
                (VariantDeclKind::PrimitiveBacked(_), false) => {
                    return Err(DeclarationError::UnexpectedBackingValue {
                        type_name: self.name(decl.name),
                        variant: self.name(variant.name),
                    });
                }
                (_, true) => {
                    return Err(DeclarationError::MissingBackingValue {
                        type_name: self.name(decl.name),
                        variant: self.name(variant.name),
                        backing: decl.backing.to_string(),
                    });
                }
                (_, false) => {}
            }
        }
        Ok(())
    }

    // Backed variants cannot meet unit or associated ones here: rule 3
    // already rejects any mix of backed and unbacked variants.
    fn check_fields(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        for variant in &decl.variants {
            let VariantDeclKind::Associated(fields) = &variant.kind else {
                continue;
            };
            let mut seen = FxHashSet::default();
            if let Some(dup) = fields.iter().find(|field| !seen.insert(field.name)) {
                return Err(DeclarationError::DuplicateField {
                    type_name: self.name(decl.name),
                    variant: self.name(variant.name),
                    field: self.name(dup.name),
                });
            }
        }

        let unit = decl
            .variants
            .iter()
            .find(|variant| matches!(variant.kind, VariantDeclKind::Unit));
        let associated = decl
            .variants
            .iter()
            .find(|variant| matches!(variant.kind, VariantDeclKind::Associated(_)));
        if let (Some(unit), Some(associated)) = (unit, associated) {
            return Err(DeclarationError::MixedVariantKinds {
                type_name: self.name(decl.name),
                unit: self.name(unit.name),
                associated: self.name(associated.name),
            });
        }

        if let Some(property) = decl.properties.first() {
            return Err(DeclarationError::TypeLevelFields {
                type_name: self.name(decl.name),
                field: self.name(property.name),
            });
        }
        Ok(())
    }

    fn check_methods<'d>(
        &self,
        decl: &'d EnumDeclaration,
    ) -> Result<Canonical<'d>, DeclarationError> {
        // Duplicates per owner.
        let mut seen = FxHashSet::default();
        if let Some(dup) = decl.shared_methods.iter().find(|m| !seen.insert(m.sig.name)) {
            return Err(DeclarationError::DuplicateMethod {
                owner: self.name(decl.name),
                method: self.name(dup.sig.name),
            });
        }
        for variant in &decl.variants {
            let mut seen = FxHashSet::default();
            if let Some(dup) = variant.methods.iter().find(|m| !seen.insert(m.sig.name)) {
                return Err(DeclarationError::DuplicateMethod {
                    owner: self.qualified(decl, variant),
                    method: self.name(dup.sig.name),
                });
            }
        }

        // Homogeneity: shared declarations fix the signature, else the first
        // variant that declares the method does.
        let mut canonical: Canonical<'d> = decl
            .shared_methods
            .iter()
            .map(|m| (m.sig.name, &m.sig))
            .collect();
        for variant in &decl.variants {
            for method in &variant.methods {
                match canonical.entry(method.sig.name) {
                    Entry::Occupied(expected) if **expected.get() != method.sig => {
                        return Err(DeclarationError::SignatureMismatch {
                            type_name: self.name(decl.name),
                            owner: self.qualified(decl, variant),
                            method: self.name(method.sig.name),
                            expected: expected.get().display(self.interner),
                            found: method.sig.display(self.interner),
                        });
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(slot) => {
                        slot.insert(&method.sig);
                    }
                }
            }
        }

        // Coverage.
        let inherited: FxHashSet<Name> = decl
            .shared_methods
            .iter()
            .filter(|m| !m.is_abstract())
            .map(|m| m.sig.name)
            .collect();
        let mut required = Vec::new();
        let mut seen = FxHashSet::default();
        let abstract_methods = decl
            .shared_methods
            .iter()
            .filter(|m| m.is_abstract())
            .map(|m| m.sig.name);
        let variant_methods = decl
            .variants
            .iter()
            .flat_map(|v| v.methods.iter())
            .filter(|m| !m.exclusive)
            .map(|m| m.sig.name);
        for name in abstract_methods.chain(variant_methods) {
            if !inherited.contains(&name) && seen.insert(name) {
                required.push(name);
            }
        }

        for variant in &decl.variants {
            for &method in &required {
                if !variant.methods.iter().any(|m| m.sig.name == method) {
                    return Err(DeclarationError::IncompleteVariantMethod {
                        type_name: self.name(decl.name),
                        variant: self.name(variant.name),
                        method: self.name(method),
                    });
                }
            }
        }

        Ok(canonical)
    }

    fn check_interfaces(
        &self,
        decl: &EnumDeclaration,
        canonical: &Canonical<'_>,
    ) -> Result<Vec<Name>, DeclarationError> {
        let closure = self.interfaces.closure(&decl.interfaces).map_err(|missing| {
            DeclarationError::UnknownInterface {
                owner: self.name(decl.name),
                interface: self.name(missing),
            }
        })?;

        for (interface, required) in self.interfaces.requirements(&closure) {
            if let Some(found) = canonical.get(&required.name) {
                if *found != required {
                    return Err(DeclarationError::InterfaceSignatureMismatch {
                        type_name: self.name(decl.name),
                        interface: self.name(interface),
                        expected: required.display(self.interner),
                        found: found.display(self.interner),
                    });
                }
            }

            let shared = decl
                .shared_methods
                .iter()
                .any(|m| m.sig.name == required.name && !m.is_abstract());
            if shared {
                continue;
            }
            if let Some(variant) = decl
                .variants
                .iter()
                .find(|v| !v.methods.iter().any(|m| m.sig.name == required.name))
            {
                return Err(DeclarationError::InterfaceConformance {
                    type_name: self.name(decl.name),
                    interface: self.name(interface),
                    variant: self.name(variant.name),
                    method: self.name(required.name),
                });
            }
        }

        Ok(closure)
    }

    fn check_constructors(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        match decl.variants.iter().find(|v| v.constructor.is_some()) {
            Some(variant) => Err(DeclarationError::ExplicitConstructor {
                type_name: self.name(decl.name),
                variant: self.name(variant.name),
            }),
            None => Ok(()),
        }
    }

    fn check_string_hooks(&self, decl: &EnumDeclaration) -> Result<(), DeclarationError> {
        if !decl.backing.is_backed() {
            return Ok(());
        }
        let owner = if decl.string_hook.is_some() {
            Some(self.name(decl.name))
        } else {
            decl.variants
                .iter()
                .find(|v| v.string_hook.is_some())
                .map(|v| self.qualified(decl, v))
        };
        match owner {
            Some(owner) => Err(DeclarationError::StringHookOnBackedEnum {
                type_name: self.name(decl.name),
                owner,
            }),
            None => Ok(()),
        }
    }
}
