use super::Board;

/// Side length of the 3x3 super-blocks used for the distinctness rule
pub const SUPER_BLOCK_SIZE: usize = 3;

/// Which of the two fixed 2x2 templates a region matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// `[1,0; 1,1]` - filled, empty / filled, filled
    PatternA,
    /// `[1,1; 0,1]` - filled, filled / empty, filled
    PatternB,
}

impl RegionKind {
    /// Template cells as `[top_left, top_right, bottom_left, bottom_right]`
    pub fn template(&self) -> [bool; 4] {
        match self {
            RegionKind::PatternA => [true, false, true, true],
            RegionKind::PatternB => [true, true, false, true],
        }
    }

    /// Check whether the 2x2 block with top-left corner (row, col) matches
    /// this template
    pub fn matches(&self, board: &Board, row: usize, col: usize) -> bool {
        let [tl, tr, bl, br] = self.template();
        board.get(row, col) == tl
            && board.get(row, col + 1) == tr
            && board.get(row + 1, col) == bl
            && board.get(row + 1, col + 1) == br
    }
}

/// A 2x2 template match, identified by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Row of the top-left cell
    pub row: usize,
    /// Column of the top-left cell
    pub col: usize,
    /// Which template matched
    pub kind: RegionKind,
}

impl Region {
    /// Id of the 3x3 super-block containing this region's top-left cell
    pub fn super_block(&self) -> (usize, usize) {
        (self.row / SUPER_BLOCK_SIZE, self.col / SUPER_BLOCK_SIZE)
    }
}
