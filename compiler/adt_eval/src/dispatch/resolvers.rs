use adt_ir::Name;
use adt_types::{EnumType, EnumValue};

use super::{MethodResolution, MethodResolver};

/// Resolver for methods declared on the receiver's own variant.
///
/// Priority 0: a variant override always wins over a shared method.
/// Exclusive methods live only on their variant, so other variants miss here.
#[derive(Clone, Copy, Debug, Default)]
pub struct VariantMethodResolver;

impl MethodResolver for VariantMethodResolver {
    fn resolve<'a>(
        &self,
        receiver: &'a EnumValue,
        _ty: &'a EnumType,
        method: Name,
    ) -> MethodResolution<'a> {
        match receiver.descriptor().method(method) {
            Some(m) => MethodResolution::Variant(m),
            None => MethodResolution::NotFound,
        }
    }

    fn priority(&self) -> u8 {
        0
    }

    fn name(&self) -> &'static str {
        "VariantMethodResolver"
    }
}

/// Resolver for shared methods on the owning type.
///
/// Abstract methods are skipped: validation guarantees every variant
/// implements them, so they are always found by the variant resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct SharedMethodResolver;

impl MethodResolver for SharedMethodResolver {
    fn resolve<'a>(
        &self,
        _receiver: &'a EnumValue,
        ty: &'a EnumType,
        method: Name,
    ) -> MethodResolution<'a> {
        match ty.shared_method(method) {
            Some(m) if !m.is_abstract() => MethodResolution::Shared(m),
            _ => MethodResolution::NotFound,
        }
    }

    fn priority(&self) -> u8 {
        1
    }

    fn name(&self) -> &'static str {
        "SharedMethodResolver"
    }
}
