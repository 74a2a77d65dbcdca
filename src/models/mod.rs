//! Core data structures
//!
//! This module holds the types shared by the search engine and the
//! validation rules:
//! - `Board` (fixed 12x12 binary grid)
//! - `Region` and `RegionKind` (2x2 template matches and their super-blocks)

pub mod board;
pub mod region;

pub use board::{BOARD_SIZE, Board};
pub use region::{Region, RegionKind, SUPER_BLOCK_SIZE};
