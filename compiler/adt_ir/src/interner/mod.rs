//! Sharded string interner for type, variant and method names.
//!
//! Registration interns every identifier of a declaration once; dispatch and
//! lookups afterwards compare `Name`s. Per-shard locking keeps concurrent
//! registrations of unrelated types from contending on one lock.

#![expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInterner thread-safety"
)]

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded the 28-bit local index space.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// Interned strings are leaked and live for the process lifetime, which
/// matches the lifetime of registered enum types.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard index is bounded by NUM_SHARDS (16)"
    )]
    #[inline]
    fn shard_bits(shard_idx: usize) -> u32 {
        shard_idx as u32
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Name::new(Self::shard_bits(shard_idx), local));
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(Self::shard_bits(shard_idx), local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|local| *local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: guard.strings.len(),
            })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(Self::shard_bits(shard_idx), local))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds its 28-bit capacity. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a string's Name without interning it.
    ///
    /// Returns `None` when the string was never interned, which lets query
    /// paths reject unknown identifiers without growing the table.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        let local = *self.shards[shard_idx].read().map.get(s)?;
        Some(Name::new(Self::shard_bits(shard_idx), local))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        self.lookup_static(name)
    }

    /// Look up the string for a Name, returning a `'static` reference.
    ///
    /// Interned strings are never deallocated.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings.get(name.local()).copied().unwrap_or("")
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner holds only the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Trait for looking up interned string names.
///
/// Higher layers accept any `StringLookup` implementor for rendering names
/// in errors without depending on `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner handle.
///
/// One interner is shared by the registry, the dispatcher and every thread
/// that declares or invokes enum types.
#[derive(Clone, Debug)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
