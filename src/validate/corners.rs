use crate::models::Board;

/// Top-left corners of the four 2x2 anchor blocks
pub const CORNER_ANCHORS: [(usize, usize); 4] = [(0, 0), (0, 10), (10, 0), (10, 10)];

/// How many of the four corner anchor blocks are fully filled
pub fn filled_corner_blocks(board: &Board) -> usize {
    CORNER_ANCHORS
        .iter()
        .filter(|&&(row, col)| board.block_filled(row, col))
        .count()
}

/// Check 1: exactly 3 corner blocks filled, never all 4
pub fn exactly_three_filled(board: &Board) -> bool {
    filled_corner_blocks(board) == 3
}
