//! `RuntimeBuilder` for creating `Runtime` instances with various configurations.

use adt_ir::SharedInterner;
use adt_types::TypeRegistry;

use super::Runtime;
use crate::dispatch::MethodDispatcher;
use crate::RuntimeMode;

/// Builder for `Runtime`.
///
/// The mode picks the call-depth limit unless `max_call_depth` sets one
/// explicitly. Dispatch always uses the standard resolver chain.
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    interner: Option<SharedInterner>,
    mode: RuntimeMode,
    max_call_depth: Option<usize>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing interner instead of creating one.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the mode's call-depth limit. Clamped to at least 1 so a
    /// top-level `invoke` can always run.
    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = Some(limit.max(1));
        self
    }

    pub fn build(self) -> Runtime {
        let interner = self.interner.unwrap_or_default();
        let max_call_depth = self
            .max_call_depth
            .unwrap_or_else(|| self.mode.max_call_depth());
        tracing::debug!(mode = ?self.mode, max_call_depth, "building runtime");
        Runtime {
            registry: TypeRegistry::new(interner.clone()),
            interner,
            dispatcher: MethodDispatcher::standard(),
            mode: self.mode,
            max_call_depth,
        }
    }
}
