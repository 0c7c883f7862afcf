//! Precomputed shape of a registered enum type.

use bitflags::bitflags;

bitflags! {
    /// Facts about an enum type, computed once at registration.
    ///
    /// Lets queries like `cases` or the primitive bridge reject a type
    /// without walking its variants.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct EnumFlags: u8 {
        /// At least one unit variant.
        const UNIT = 1 << 0;
        /// At least one associated variant.
        const ASSOCIATED = 1 << 1;
        /// Variants are primitive-backed.
        const BACKED = 1 << 2;
        /// Declares shared or abstract methods.
        const SHARED_METHODS = 1 << 3;
        /// Some variant declares an exclusive method.
        const EXCLUSIVE_METHODS = 1 << 4;
        /// A string hook is installed at type or variant level.
        const STRING_HOOK = 1 << 5;
    }
}

impl EnumFlags {
    /// Every variant has a singleton.
    #[inline]
    pub fn is_enumerable(self) -> bool {
        !self.contains(Self::ASSOCIATED)
    }

    #[inline]
    pub fn is_primitive_backed(self) -> bool {
        self.contains(Self::BACKED)
    }
}
