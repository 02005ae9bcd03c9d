//! ff-core: stable foundation for finflow.
//!
//! Contains:
//! - money (fixed-point EUR millions with one decimal)
//! - ids (compact ordinal IDs for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod money;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FfError, FfResult};
pub use ids::*;
pub use money::Money;
