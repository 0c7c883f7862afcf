//! Runtime policies.

/// Runtime mode: selects the call-depth limit and dispatch tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuntimeMode {
    /// General use.
    #[default]
    Standard,
    /// Tight depth limit; every dispatch is logged at `debug`.
    Strict,
    /// Generous but bounded, for test suites with deep state machines.
    Test,
}

impl RuntimeMode {
    /// Maximum nesting of method invocations.
    ///
    /// - `Standard`: 256
    /// - `Strict`: 64
    /// - `Test`: 500
    #[inline]
    pub fn max_call_depth(self) -> usize {
        match self {
            Self::Standard => 256,
            Self::Strict => 64,
            Self::Test => 500,
        }
    }

    /// Whether dispatch decisions are logged at `debug` instead of `trace`.
    #[inline]
    pub fn traces_dispatch(self) -> bool {
        matches!(self, Self::Strict)
    }
}
