//! Full-board acceptance rules
//!
//! A completed board is accepted only if it passes all five structural
//! checks:
//! - Corner blocks: exactly 3 of the 4 corner 2x2 blocks fully filled
//! - Coverage: every row and column has at least 5 filled cells
//! - Pattern-A regions: at least 2 matches of `[1,0; 1,1]`
//! - Pattern-B regions: at least 2 matches of `[1,1; 0,1]`
//! - Distinctness: each pattern's matches span at least 2 distinct 3x3
//!   super-blocks
//!
//! Every check is a pure function of the 144 cell values; nothing here
//! depends on search state.

/// Corner anchor blocks (check 1)
pub mod corners;
/// Row/column fill minimums (check 2)
pub mod coverage;
/// 2x2 template scanning and super-block distinctness (checks 3-5)
pub mod regions;

use crate::models::Board;

/// Run all five acceptance checks, cheapest first
pub fn is_valid(board: &Board) -> bool {
    corners::exactly_three_filled(board)
        && coverage::meets_line_minimums(board)
        && regions::patterns_well_distributed(board)
}
