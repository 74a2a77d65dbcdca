//! QR Forge - backtracking generator for hypothetical QR-style boards
//!
//! Enumerates 12x12 binary boards that satisfy a fixed set of structural
//! rules resembling QR finder/alignment patterns, using a depth-first
//! backtracking search with row/column pruning. This is a search exercise,
//! not a real QR encoder: there is no error correction, masking, or
//! standard-compliant pattern placement.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Output sinks (text artifacts, PNG rasterization)
pub mod export;
/// Core data structures (Board, Region)
pub mod models;
/// Backtracking search driver and pruning
pub mod search;
/// Full-board acceptance rules
pub mod validate;

pub use models::{BOARD_SIZE, Board, Region, RegionKind};
pub use search::BoardSearch;

/// Run the capped search and collect up to `max_solutions` accepted boards
///
/// The traversal order (row-major) and value order (0 before 1) are fixed,
/// so the returned sequence is deterministic across runs.
///
/// # Example
/// ```no_run
/// let boards = qr_forge::generate(1);
/// assert!(boards.iter().all(qr_forge::validate::is_valid));
/// ```
pub fn generate(max_solutions: usize) -> Vec<Board> {
    BoardSearch::run(max_solutions)
}

/// Stop at the first accepted board, if the search space holds any
pub fn generate_first() -> Option<Board> {
    BoardSearch::first()
}

/// Generator with a configurable solution cap
///
/// The historical variants capped the search at 1 and 10 solutions; the cap
/// here is any non-negative count.
pub struct Generator {
    /// Maximum number of boards to accept before cutting the search short
    max_solutions: usize,
}

impl Generator {
    /// Create a generator that stops after the first accepted board
    pub fn new() -> Self {
        Self { max_solutions: 1 }
    }

    /// Create a generator with a specific solution cap
    pub fn with_limit(max_solutions: usize) -> Self {
        Self { max_solutions }
    }

    /// The configured solution cap
    pub fn limit(&self) -> usize {
        self.max_solutions
    }

    /// Run the search with the configured cap
    pub fn run(&self) -> Vec<Board> {
        generate(self.max_solutions)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cap_yields_nothing() {
        assert!(generate(0).is_empty());
        assert!(Generator::with_limit(0).run().is_empty());
    }

    #[test]
    fn test_default_generator_stops_at_one() {
        let generator = Generator::default();
        assert_eq!(generator.limit(), 1);
        let boards = generator.run();
        assert_eq!(boards.len(), 1);
        assert!(validate::is_valid(&boards[0]));
    }
}
