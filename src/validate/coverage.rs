use crate::models::{BOARD_SIZE, Board};

/// Minimum number of filled cells required in every row and column
pub const MIN_LINE_FILL: usize = 5;

/// Check 2: every row and every column carries at least `MIN_LINE_FILL`
/// filled cells, recomputed from the raw grid
pub fn meets_line_minimums(board: &Board) -> bool {
    for i in 0..BOARD_SIZE {
        if board.filled_in_row(i) < MIN_LINE_FILL || board.filled_in_col(i) < MIN_LINE_FILL {
            return false;
        }
    }
    true
}
