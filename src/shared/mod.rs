//! Shared helpers used by the repository's pagination and batching loops.

pub mod json;

// Re-export commonly used items
pub use json::{append_items, is_empty_page};
