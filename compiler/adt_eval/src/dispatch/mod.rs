//! Method resolution chain for enum method dispatch.
//!
//! Chain of Responsibility over a fixed set of resolvers.
//!
//! # Resolution Order
//!
//! 1. Methods declared on the receiver's variant via `VariantMethodResolver`
//!    (priority 0)
//! 2. Shared methods declared on the owning type via `SharedMethodResolver`
//!    (priority 1)
//!
//! A call nobody resolves is a `NoSuchMethod` error. Dispatch is keyed only
//! by the receiver's fixed tag, so resolution never needs a second pass.

mod context;
mod resolvers;

#[expect(
    clippy::disallowed_types,
    reason = "Arc for immutable resolver list shared by runtime clones"
)]
use std::sync::Arc;

use adt_ir::{MethodSig, Name};
use adt_types::{EnumType, EnumValue, NativeMethod, SharedMethod, VariantMethod};

pub(crate) use context::CallContext;
pub use resolvers::{SharedMethodResolver, VariantMethodResolver};

/// What a resolver found for a method name.
#[derive(Clone, Copy, Debug)]
pub enum MethodResolution<'a> {
    /// Declared on the receiver's variant.
    Variant(&'a VariantMethod),
    /// Inherited from the owning type.
    Shared(&'a SharedMethod),
    /// Not handled by this resolver.
    NotFound,
}

impl<'a> MethodResolution<'a> {
    /// Signature and body of a found method.
    ///
    /// `None` for `NotFound` and for abstract shared methods.
    pub fn callable(self) -> Option<(&'a MethodSig, &'a NativeMethod)> {
        match self {
            Self::Variant(m) => Some((&m.sig, &m.body)),
            Self::Shared(m) => m.body.as_ref().map(|body| (&m.sig, body)),
            Self::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Trait for method resolvers in the chain of responsibility.
pub trait MethodResolver {
    /// Try to resolve `method` for `receiver`, whose type is `ty`.
    fn resolve<'a>(
        &self,
        receiver: &'a EnumValue,
        ty: &'a EnumType,
        method: Name,
    ) -> MethodResolution<'a>;

    /// Lower runs first.
    fn priority(&self) -> u8;

    /// Human-readable name, for tracing.
    fn name(&self) -> &'static str;
}

/// Enum-based resolver kind for the fixed set of method resolvers.
#[derive(Clone, Debug)]
pub enum MethodResolverKind {
    /// Variant-specific methods (priority 0)
    Variant(VariantMethodResolver),
    /// Shared methods on the owning type (priority 1)
    Shared(SharedMethodResolver),
}

impl MethodResolverKind {
    pub fn resolve<'a>(
        &self,
        receiver: &'a EnumValue,
        ty: &'a EnumType,
        method: Name,
    ) -> MethodResolution<'a> {
        match self {
            Self::Variant(r) => r.resolve(receiver, ty, method),
            Self::Shared(r) => r.resolve(receiver, ty, method),
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            Self::Variant(r) => r.priority(),
            Self::Shared(r) => r.priority(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Variant(r) => r.name(),
            Self::Shared(r) => r.name(),
        }
    }
}

/// Method dispatcher that chains the resolvers.
///
/// The resolver list is immutable after construction; clones share it.
#[derive(Clone, Debug)]
#[expect(
    clippy::disallowed_types,
    reason = "Arc for immutable resolver list shared by runtime clones"
)]
pub struct MethodDispatcher {
    resolvers: Arc<Vec<MethodResolverKind>>,
}

impl MethodDispatcher {
    /// Create a dispatcher; resolvers are sorted by priority.
    #[expect(
        clippy::disallowed_types,
        reason = "Arc for immutable resolver list shared by runtime clones"
    )]
    pub fn new(mut resolvers: Vec<MethodResolverKind>) -> Self {
        resolvers.sort_by_key(MethodResolverKind::priority);
        Self {
            resolvers: Arc::new(resolvers),
        }
    }

    /// Variant methods first, then shared methods.
    pub fn standard() -> Self {
        Self::new(vec![
            MethodResolverKind::Shared(SharedMethodResolver),
            MethodResolverKind::Variant(VariantMethodResolver),
        ])
    }

    /// Names of the resolvers in the order they run.
    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(MethodResolverKind::name).collect()
    }

    /// First resolution any resolver produces, with the resolver's name.
    pub fn resolve<'a>(
        &self,
        receiver: &'a EnumValue,
        ty: &'a EnumType,
        method: Name,
    ) -> (MethodResolution<'a>, Option<&'static str>) {
        for resolver in self.resolvers.iter() {
            let result = resolver.resolve(receiver, ty, method);
            if result.is_found() {
                return (result, Some(resolver.name()));
            }
        }
        (MethodResolution::NotFound, None)
    }
}

impl Default for MethodDispatcher {
    fn default() -> Self {
        Self::standard()
    }
}
