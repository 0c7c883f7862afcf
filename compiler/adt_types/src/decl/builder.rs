//! Fluent construction of `EnumDeclaration`s.
//!
//! Identifiers are interned as they are added, so a finished declaration
//! only holds `Name`s.

use adt_diagnostic::AdtResult;
use adt_ir::{BackingKind, FieldType, Literal, MethodSig, Name, StringInterner, Visibility};

use super::{
    ConstructorDecl, EnumDeclaration, FieldDecl, MethodContext, NativeMethod, SharedMethodDecl,
    StringHook, VariantDecl, VariantDeclKind, VariantMethodDecl,
};
use crate::{EnumValue, Value};

impl EnumDeclaration {
    /// Start an unbacked declaration named `name`.
    pub fn builder<'i>(interner: &'i StringInterner, name: &str) -> EnumDeclarationBuilder<'i> {
        EnumDeclarationBuilder {
            interner,
            decl: EnumDeclaration {
                name: interner.intern(name),
                backing: BackingKind::None,
                variants: Vec::new(),
                shared_methods: Vec::new(),
                interfaces: Vec::new(),
                properties: Vec::new(),
                string_hook: None,
            },
        }
    }
}

fn signature(
    interner: &StringInterner,
    name: &str,
    params: &[FieldType],
    ret: FieldType,
) -> MethodSig {
    MethodSig::new(interner.intern(name), params.to_vec(), ret)
}

/// Builder for an `EnumDeclaration`.
///
/// Nothing is validated here; invalid shapes are reported by the registry.
pub struct EnumDeclarationBuilder<'i> {
    interner: &'i StringInterner,
    decl: EnumDeclaration,
}

impl<'i> EnumDeclarationBuilder<'i> {
    /// Declare the backing primitive.
    #[must_use]
    pub fn backed(mut self, kind: BackingKind) -> Self {
        self.decl.backing = kind;
        self
    }

    /// Add a unit variant.
    #[must_use]
    pub fn unit(self, name: &str) -> Self {
        self.unit_with(name, |v| v)
    }

    /// Add a unit variant and configure its methods.
    #[must_use]
    pub fn unit_with(
        self,
        name: &str,
        f: impl FnOnce(VariantBuilder<'i>) -> VariantBuilder<'i>,
    ) -> Self {
        self.variant(name, VariantDeclKind::Unit, f)
    }

    /// Add a primitive-backed variant.
    #[must_use]
    pub fn literal(self, name: &str, literal: impl Into<Literal>) -> Self {
        self.literal_with(name, literal, |v| v)
    }

    #[must_use]
    pub fn literal_with(
        self,
        name: &str,
        literal: impl Into<Literal>,
        f: impl FnOnce(VariantBuilder<'i>) -> VariantBuilder<'i>,
    ) -> Self {
        self.variant(name, VariantDeclKind::PrimitiveBacked(literal.into()), f)
    }

    /// Add an associated variant with public fields.
    #[must_use]
    pub fn associated(self, name: &str, fields: &[(&str, FieldType)]) -> Self {
        self.associated_with(name, fields, |v| v)
    }

    #[must_use]
    pub fn associated_with(
        self,
        name: &str,
        fields: &[(&str, FieldType)],
        f: impl FnOnce(VariantBuilder<'i>) -> VariantBuilder<'i>,
    ) -> Self {
        let fields = fields
            .iter()
            .map(|&(field, ty)| FieldDecl {
                name: self.interner.intern(field),
                ty,
                visibility: Visibility::Public,
            })
            .collect();
        self.variant(name, VariantDeclKind::Associated(fields), f)
    }

    fn variant(
        mut self,
        name: &str,
        kind: VariantDeclKind,
        f: impl FnOnce(VariantBuilder<'i>) -> VariantBuilder<'i>,
    ) -> Self {
        let builder = VariantBuilder {
            interner: self.interner,
            decl: VariantDecl {
                name: self.interner.intern(name),
                kind,
                methods: Vec::new(),
                string_hook: None,
                constructor: None,
            },
        };
        self.decl.variants.push(f(builder).decl);
        self
    }

    /// Add a shared method, available on every variant that does not
    /// override it.
    #[must_use]
    pub fn shared<F>(mut self, name: &str, params: &[FieldType], ret: FieldType, body: F) -> Self
    where
        F: Fn(&dyn MethodContext, &EnumValue, &[Value]) -> AdtResult<Value> + Send + Sync + 'static,
    {
        self.decl.shared_methods.push(SharedMethodDecl {
            sig: signature(self.interner, name, params, ret),
            body: Some(NativeMethod::new(body)),
        });
        self
    }

    /// Add an abstract method every variant must implement.
    #[must_use]
    pub fn abstract_method(mut self, name: &str, params: &[FieldType], ret: FieldType) -> Self {
        self.decl.shared_methods.push(SharedMethodDecl {
            sig: signature(self.interner, name, params, ret),
            body: None,
        });
        self
    }

    /// Claim conformance to a registered interface.
    #[must_use]
    pub fn implements(mut self, interface: &str) -> Self {
        self.decl.interfaces.push(self.interner.intern(interface));
        self
    }

    /// Declare a field on the type itself.
    #[must_use]
    pub fn property(mut self, name: &str, ty: FieldType) -> Self {
        self.decl.properties.push(FieldDecl {
            name: self.interner.intern(name),
            ty,
            visibility: Visibility::Public,
        });
        self
    }

    /// Override string conversion for every variant without its own hook.
    #[must_use]
    pub fn string_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&EnumValue) -> String + Send + Sync + 'static,
    {
        self.decl.string_hook = Some(StringHook::new(hook));
        self
    }

    /// The interned name of the declaration, for `FieldType::Enum`.
    pub fn name(&self) -> Name {
        self.decl.name
    }

    pub fn build(self) -> EnumDeclaration {
        self.decl
    }
}

/// Builder for the methods and hooks of one variant.
pub struct VariantBuilder<'i> {
    interner: &'i StringInterner,
    decl: VariantDecl,
}

impl VariantBuilder<'_> {
    /// Add a method that every other variant must also provide.
    #[must_use]
    pub fn method<F>(self, name: &str, params: &[FieldType], ret: FieldType, body: F) -> Self
    where
        F: Fn(&dyn MethodContext, &EnumValue, &[Value]) -> AdtResult<Value> + Send + Sync + 'static,
    {
        self.push_method(name, params, ret, NativeMethod::new(body), false)
    }

    /// Add a parameterless method returning a fixed value.
    #[must_use]
    pub fn returns(self, name: &str, ret: FieldType, value: impl Into<Value>) -> Self {
        self.push_method(name, &[], ret, NativeMethod::constant(value), false)
    }

    /// Add a method available on this variant only.
    #[must_use]
    pub fn exclusive<F>(self, name: &str, params: &[FieldType], ret: FieldType, body: F) -> Self
    where
        F: Fn(&dyn MethodContext, &EnumValue, &[Value]) -> AdtResult<Value> + Send + Sync + 'static,
    {
        self.push_method(name, params, ret, NativeMethod::new(body), true)
    }

    fn push_method(
        mut self,
        name: &str,
        params: &[FieldType],
        ret: FieldType,
        body: NativeMethod,
        exclusive: bool,
    ) -> Self {
        self.decl.methods.push(VariantMethodDecl {
            sig: signature(self.interner, name, params, ret),
            body,
            exclusive,
        });
        self
    }

    /// Mark an already declared field private.
    #[must_use]
    pub fn private(mut self, field: &str) -> Self {
        let name = self.interner.intern(field);
        if let VariantDeclKind::Associated(fields) = &mut self.decl.kind {
            for decl in fields.iter_mut().filter(|decl| decl.name == name) {
                decl.visibility = Visibility::Private;
            }
        }
        self
    }

    /// Override string conversion for this variant.
    #[must_use]
    pub fn string_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&EnumValue) -> String + Send + Sync + 'static,
    {
        self.decl.string_hook = Some(StringHook::new(hook));
        self
    }

    /// Attach a hand-written constructor.
    #[must_use]
    pub fn explicit_constructor(mut self, params: &[&str]) -> Self {
        self.decl.constructor = Some(ConstructorDecl {
            params: params.iter().map(|p| self.interner.intern(p)).collect(),
        });
        self
    }
}
