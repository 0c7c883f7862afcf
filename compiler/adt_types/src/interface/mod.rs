//! Interfaces: named capability contracts that enum types conform to.
//!
//! An interface lists method signatures and may extend other interfaces.
//! Conformance is checked against the transitive closure of `extends`.

use adt_diagnostic::DeclarationError;
use adt_ir::{FieldType, MethodSig, Name, StringInterner, StringLookup};
use rustc_hash::{FxHashMap, FxHashSet};

/// A capability contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: Name,
    /// Super-interfaces whose methods are required as well.
    pub extends: Vec<Name>,
    pub methods: Vec<MethodSig>,
}

impl InterfaceDecl {
    pub fn builder<'i>(interner: &'i StringInterner, name: &str) -> InterfaceDeclBuilder<'i> {
        InterfaceDeclBuilder {
            interner,
            decl: InterfaceDecl {
                name: interner.intern(name),
                extends: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// A method declared directly on this interface.
    pub fn method(&self, name: Name) -> Option<&MethodSig> {
        self.methods.iter().find(|sig| sig.name == name)
    }
}

pub struct InterfaceDeclBuilder<'i> {
    interner: &'i StringInterner,
    decl: InterfaceDecl,
}

impl InterfaceDeclBuilder<'_> {
    #[must_use]
    pub fn method(mut self, name: &str, params: &[FieldType], ret: FieldType) -> Self {
        let sig = MethodSig::new(self.interner.intern(name), params.to_vec(), ret);
        self.decl.methods.push(sig);
        self
    }

    #[must_use]
    pub fn extends(mut self, interface: &str) -> Self {
        self.decl.extends.push(self.interner.intern(interface));
        self
    }

    pub fn build(self) -> InterfaceDecl {
        self.decl
    }
}

/// Registered interfaces, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: FxHashMap<Name, InterfaceDecl>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interface. Super-interfaces must already be registered.
    pub fn register(
        &mut self,
        decl: InterfaceDecl,
        interner: &impl StringLookup,
    ) -> Result<(), DeclarationError> {
        let label = || interner.lookup(decl.name).to_owned();

        if self.interfaces.contains_key(&decl.name) {
            return Err(DeclarationError::DuplicateInterface { interface: label() });
        }

        if let Some(missing) = decl
            .extends
            .iter()
            .find(|parent| !self.interfaces.contains_key(*parent))
        {
            return Err(DeclarationError::UnknownInterface {
                owner: label(),
                interface: interner.lookup(*missing).to_owned(),
            });
        }

        let mut seen = FxHashSet::default();
        if let Some(dup) = decl.methods.iter().find(|sig| !seen.insert(sig.name)) {
            return Err(DeclarationError::DuplicateMethod {
                owner: label(),
                method: interner.lookup(dup.name).to_owned(),
            });
        }

        tracing::debug!(interface = interner.lookup(decl.name), "registered interface");
        self.interfaces.insert(decl.name, decl);
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<&InterfaceDecl> {
        self.interfaces.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.interfaces.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// All interfaces reachable from `roots` through `extends`, roots first,
    /// each listed once.
    ///
    /// Returns the first unregistered name on failure.
    pub fn closure(&self, roots: &[Name]) -> Result<Vec<Name>, Name> {
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack: Vec<Name> = roots.iter().rev().copied().collect();

        while let Some(name) = stack.pop() {
            if !visited.insert(name) {
                continue;
            }
            let decl = self.interfaces.get(&name).ok_or(name)?;
            order.push(name);
            stack.extend(decl.extends.iter().rev().copied());
        }

        Ok(order)
    }

    /// Every method required by the given interfaces, paired with the
    /// interface that declares it.
    pub fn requirements<'a>(&'a self, closure: &[Name]) -> Vec<(Name, &'a MethodSig)> {
        closure
            .iter()
            .filter_map(|name| self.interfaces.get(name))
            .flat_map(|decl| decl.methods.iter().map(move |sig| (decl.name, sig)))
            .collect()
    }
}
