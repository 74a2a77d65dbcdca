//! Backtracking search over board fillings
//!
//! This module contains the depth-first driver that enumerates all 2^144
//! fillings of the board in row-major order, and the pruning predicate
//! that abandons branches whose rows or columns can no longer reach the
//! coverage minimum.

/// Depth-first backtracking driver with commit/undo discipline
pub mod engine;
/// Reach-minimum pruning on running row/column counts
pub mod pruning;

pub use engine::BoardSearch;
