//! Conflict detection logic.
//!
//! This module contains the business logic of a conflict check:
//! - [`overlap`] - Closed-interval overlap test
//! - [`target_cache`] - One-time conversion of target blocks
//! - [`engine`] - Row-by-row conflict detection with per-row errors

mod engine;
mod overlap;
mod target_cache;

// Re-export public functions
pub use engine::{run, run_with};
pub use overlap::overlaps;
pub use target_cache::{TargetCache, TargetEntry};
