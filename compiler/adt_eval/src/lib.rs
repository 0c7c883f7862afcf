//! ADT Eval - runtime behavior of registered tagged enums.
//!
//! Layers on top of `adt_types`:
//! - `dispatch`: resolver chain for `invoke` (variant method, then shared)
//! - `matching`: `match_identity` and `match_type` with exhaustiveness
//!   enforced at evaluation time
//! - `bridge`: primitive round trip, listings and coercions
//! - `Runtime`: the facade bundling interner, registry and dispatcher
//!
//! # Example
//!
//! ```
//! use adt_eval::Runtime;
//! use adt_ir::FieldType;
//!
//! let rt = Runtime::new();
//! let suit = rt
//!     .declare("Suit")
//!     .unit_with("Hearts", |v| v.returns("color", FieldType::Str, "Red"))
//!     .unit_with("Spades", |v| v.returns("color", FieldType::Str, "Black"))
//!     .build();
//! rt.register(suit).unwrap();
//!
//! let hearts = rt.make_unit("Suit", "Hearts").unwrap();
//! let color = rt.invoke(&hearts, "color", &[]).unwrap();
//! assert_eq!(color.as_str(), Some("Red"));
//! ```

pub mod bridge;
mod dispatch;
pub mod matching;
mod mode;
mod runtime;

pub use bridge::PrimitiveListing;
pub use dispatch::{
    MethodDispatcher, MethodResolution, MethodResolver, MethodResolverKind,
    SharedMethodResolver, VariantMethodResolver,
};
pub use matching::{MatchArms, MatchPattern};
pub use mode::RuntimeMode;
pub use runtime::{Runtime, RuntimeBuilder};

pub use adt_diagnostic::{AdtError, AdtResult};
pub use adt_ir::{BackingKind, FieldType, Literal};
pub use adt_types::{Args, EnumValue, MethodContext, SharedDescriptor, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=adt_eval=debug` or
/// `RUST_LOG=adt_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
