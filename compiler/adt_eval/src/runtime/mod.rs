//! The runtime facade.
//!
//! `Runtime` bundles the interner, the type registry and the method
//! dispatcher behind string-keyed operations. It is `Sync`: declare and
//! register from any thread, share values freely, invoke concurrently.

mod builder;

use std::sync::OnceLock;

use adt_diagnostic::{AdtResult, DispatchError, LookupError};
use adt_ir::{Literal, SharedInterner};
use adt_types::{
    Args, EnumDeclaration, EnumDeclarationBuilder, EnumValue, InterfaceDecl,
    InterfaceDeclBuilder, SharedDescriptor, SharedEnumType, TypeRegistry, Value,
};

use crate::bridge::{self, PrimitiveListing};
use crate::dispatch::{CallContext, MethodDispatcher};
use crate::matching::{self, MatchArms};
use crate::RuntimeMode;

pub use builder::RuntimeBuilder;

/// Registry, interner and dispatcher in one handle.
pub struct Runtime {
    interner: SharedInterner,
    registry: TypeRegistry,
    dispatcher: MethodDispatcher,
    mode: RuntimeMode,
    max_call_depth: usize,
}

static GLOBAL: OnceLock<Runtime> = OnceLock::new();

impl Runtime {
    /// A runtime in `Standard` mode with a fresh interner.
    pub fn new() -> Self {
        RuntimeBuilder::new().build()
    }

    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// The process-wide runtime, created on first use.
    pub fn global() -> &'static Runtime {
        GLOBAL.get_or_init(Runtime::new)
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    // Declarations

    /// Start declaring an enum type named `name`.
    pub fn declare(&self, name: &str) -> EnumDeclarationBuilder<'_> {
        EnumDeclaration::builder(&self.interner, name)
    }

    /// Start declaring an interface named `name`.
    pub fn interface(&self, name: &str) -> InterfaceDeclBuilder<'_> {
        InterfaceDecl::builder(&self.interner, name)
    }

    /// Validate and register a declaration.
    pub fn register(&self, decl: EnumDeclaration) -> AdtResult<SharedEnumType> {
        Ok(self.registry.register(decl)?)
    }

    pub fn register_interface(&self, decl: InterfaceDecl) -> AdtResult<()> {
        Ok(self.registry.register_interface(decl)?)
    }

    // Lookup

    pub fn lookup(&self, type_name: &str) -> Result<SharedEnumType, LookupError> {
        self.registry.resolve(type_name)
    }

    /// Variants of a type in declaration order.
    pub fn list_variants(&self, type_name: &str) -> Result<Vec<SharedDescriptor>, LookupError> {
        self.registry.list_variants(type_name)
    }

    pub fn variant(&self, type_name: &str, variant: &str) -> Result<SharedDescriptor, LookupError> {
        self.registry.variant(type_name, variant)
    }

    /// Whether the type declares or inherits the interface.
    pub fn implements(&self, type_name: &str, interface: &str) -> Result<bool, LookupError> {
        let ty = self.lookup(type_name)?;
        Ok(self
            .interner
            .get(interface)
            .is_some_and(|name| ty.implements(name)))
    }

    // Construction

    /// The singleton of a unit or primitive-backed variant.
    ///
    /// Every call returns the same record.
    pub fn make_unit(&self, type_name: &str, variant: &str) -> AdtResult<EnumValue> {
        self.registry.singleton(type_name, variant)
    }

    /// A fresh value of an associated variant.
    pub fn make_associated(
        &self,
        descriptor: &SharedDescriptor,
        args: Args<'_>,
    ) -> AdtResult<EnumValue> {
        Ok(adt_types::make_associated(&*self.interner, descriptor, args)?)
    }

    /// Construct an associated variant by name from positional values.
    pub fn construct(
        &self,
        type_name: &str,
        variant: &str,
        values: Vec<Value>,
    ) -> AdtResult<EnumValue> {
        let descriptor = self.variant(type_name, variant)?;
        self.make_associated(&descriptor, Args::Positional(values))
    }

    /// Construct an associated variant by name from named values.
    pub fn construct_named(
        &self,
        type_name: &str,
        variant: &str,
        values: Vec<(&str, Value)>,
    ) -> AdtResult<EnumValue> {
        let descriptor = self.variant(type_name, variant)?;
        self.make_associated(&descriptor, Args::Named(values))
    }

    // Primitive bridge

    pub fn from_primitive(
        &self,
        type_name: &str,
        literal: impl Into<Literal>,
    ) -> Result<EnumValue, LookupError> {
        bridge::from_primitive(&*self.lookup(type_name)?, &literal.into())
    }

    pub fn try_from_primitive(
        &self,
        type_name: &str,
        literal: impl Into<Literal>,
    ) -> Result<Option<EnumValue>, LookupError> {
        bridge::try_from_primitive(&*self.lookup(type_name)?, &literal.into())
    }

    pub fn to_primitive(&self, value: &EnumValue) -> Result<Literal, LookupError> {
        bridge::to_primitive(value)
    }

    pub fn list(&self, type_name: &str) -> Result<PrimitiveListing, LookupError> {
        bridge::list(&*self.lookup(type_name)?)
    }

    /// Position of the value's variant in declaration order.
    pub fn ordinal(&self, value: &EnumValue) -> usize {
        value.ordinal()
    }

    /// Every singleton of a type without associated variants.
    pub fn cases(&self, type_name: &str) -> Result<Vec<EnumValue>, LookupError> {
        bridge::cases(&*self.lookup(type_name)?)
    }

    // Dispatch

    /// Invoke `method` on `receiver`.
    ///
    /// The variant's own method wins, then the type's shared method;
    /// otherwise `NoSuchMethod`. Arguments and the result are checked
    /// against the resolved signature.
    #[tracing::instrument(level = "debug", skip_all, fields(
        receiver = ?receiver,
        method,
    ))]
    pub fn invoke(&self, receiver: &EnumValue, method: &str, args: &[Value]) -> AdtResult<Value> {
        self.invoke_at(0, receiver, method, args)
    }

    /// Invoke at a given nesting depth; method bodies call back through here.
    pub(crate) fn invoke_at(
        &self,
        depth: usize,
        receiver: &EnumValue,
        method: &str,
        args: &[Value],
    ) -> AdtResult<Value> {
        if depth >= self.max_call_depth {
            return Err(DispatchError::CallDepthExceeded {
                limit: self.max_call_depth,
            }
            .into());
        }

        let ty = self
            .registry
            .lookup_by_id(receiver.type_id())
            .ok_or_else(|| LookupError::UnknownType {
                type_name: receiver.type_name().to_owned(),
            })?;
        let no_such_method = || DispatchError::NoSuchMethod {
            type_name: receiver.type_name().to_owned(),
            variant: receiver.variant_name().to_owned(),
            method: method.to_owned(),
        };
        let name = self.interner.get(method).ok_or_else(no_such_method)?;

        let (resolution, resolver) = self.dispatcher.resolve(receiver, &ty, name);
        let Some((sig, body)) = resolution.callable() else {
            return Err(no_such_method().into());
        };
        if self.mode.traces_dispatch() {
            tracing::debug!(resolver, depth, receiver = ?receiver, method, "dispatch");
        } else {
            tracing::trace!(resolver, depth, method, "dispatch");
        }

        if args.len() != sig.arity() {
            return Err(DispatchError::ArgCount {
                method: method.to_owned(),
                expected: sig.arity(),
                got: args.len(),
            }
            .into());
        }
        if let Some((index, (arg, param))) = args
            .iter()
            .zip(&sig.params)
            .enumerate()
            .find(|(_, (arg, param))| !arg.matches_type(**param))
        {
            return Err(DispatchError::ArgType {
                method: method.to_owned(),
                index,
                expected: param.display(&*self.interner),
                got: arg.type_name().to_owned(),
            }
            .into());
        }

        let result = body.call(&CallContext::new(self, depth + 1), receiver, args)?;
        if !result.matches_type(sig.ret) {
            return Err(DispatchError::MethodFailed {
                method: method.to_owned(),
                message: format!(
                    "returned {}, declared {}",
                    result.type_name(),
                    sig.ret.display(&*self.interner)
                ),
            }
            .into());
        }
        Ok(result)
    }

    /// Whether `invoke(receiver, method, ..)` would resolve.
    pub fn responds_to(&self, receiver: &EnumValue, method: &str) -> bool {
        let Some(name) = self.interner.get(method) else {
            return false;
        };
        self.registry
            .lookup_by_id(receiver.type_id())
            .is_some_and(|ty| {
                self.dispatcher
                    .resolve(receiver, &ty, name)
                    .0
                    .callable()
                    .is_some()
            })
    }

    // Matching

    pub fn match_identity<T>(
        &self,
        value: &EnumValue,
        arms: MatchArms<'_, EnumValue, T>,
    ) -> AdtResult<T> {
        Ok(matching::match_identity(value, arms)?)
    }

    pub fn match_type<T>(
        &self,
        value: &EnumValue,
        arms: MatchArms<'_, SharedDescriptor, T>,
    ) -> AdtResult<T> {
        Ok(matching::match_type(value, arms)?)
    }

    /// String conversion: the hook if any, else the literal, else the
    /// variant name.
    pub fn display(&self, value: &Value) -> String {
        value.to_string()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("mode", &self.mode)
            .field("max_call_depth", &self.max_call_depth)
            .field("registry", &self.registry)
            .field("resolvers", &self.dispatcher.resolver_names())
            .finish_non_exhaustive()
    }
}
