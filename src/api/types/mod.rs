//! Request types for the VTEX REST API.
//!
//! Responses are passed through as opaque [`serde_json::Value`]s; only the
//! request side is typed here.

pub mod catalog;
pub mod order;
pub mod simulation;

// Re-export all types for convenience
pub use catalog::*;
pub use order::*;
pub use simulation::*;
