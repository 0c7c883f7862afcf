//! Diagnostics for the tagged-enum runtime.
//!
//! - Error codes for searchability (`E1xxx` declaration through `E4xxx` dispatch)
//! - One typed error enum per family, each kind carrying structured data
//! - `AdtError` as the umbrella type for `?` propagation across families

mod error_code;
mod errors;

pub use error_code::ErrorCode;
pub use errors::{
    AdtError, AdtResult, ConstructionError, DeclarationError, DispatchError, LookupError,
};
