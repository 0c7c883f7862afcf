//! Identities of registered types and their variants.

use std::sync::atomic::{AtomicU32, Ordering};

/// Next type ID. Global so that IDs never collide across registries.
static NEXT_TYPE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a registered enum type.
///
/// Allocated once per successful registration; never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub(crate) fn fresh() -> Self {
        TypeId(NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Identity of one variant: owning type plus declaration index.
///
/// `match_type` compares these, never names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantId {
    ty: TypeId,
    index: u32,
}

impl VariantId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "variant count of one declaration is far below u32::MAX"
    )]
    pub(crate) fn new(ty: TypeId, index: usize) -> Self {
        VariantId {
            ty,
            index: index as u32,
        }
    }

    /// The owning enum type.
    #[inline]
    pub fn owner(self) -> TypeId {
        self.ty
    }

    /// Position in declaration order.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}
