/// Hypothetical QR boards are always 12x12 modules
pub const BOARD_SIZE: usize = 12;

/// Total number of cells on a board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed-size 12x12 binary board stored as a flat row-major array
///
/// A single contiguous array avoids per-row heap allocation and keeps the
/// hot search loop cache friendly.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [bool; CELL_COUNT],
}

impl Board {
    /// Create an empty board (all cells 0)
    pub fn new() -> Self {
        Self {
            cells: [false; CELL_COUNT],
        }
    }

    /// Get the cell at (row, col); out-of-bounds reads return false
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        self.cells[row * BOARD_SIZE + col]
    }

    /// Set the cell at (row, col); out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return;
        }
        self.cells[row * BOARD_SIZE + col] = value;
    }

    /// Reset every cell to 0
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of filled cells in a row
    pub fn filled_in_row(&self, row: usize) -> usize {
        (0..BOARD_SIZE).filter(|&col| self.get(row, col)).count()
    }

    /// Number of filled cells in a column
    pub fn filled_in_col(&self, col: usize) -> usize {
        (0..BOARD_SIZE).filter(|&row| self.get(row, col)).count()
    }

    /// Check whether the 2x2 block with top-left corner (row, col) is fully
    /// filled; blocks extending past the board edge are never filled
    pub fn block_filled(&self, row: usize, col: usize) -> bool {
        if row + 1 >= BOARD_SIZE || col + 1 >= BOARD_SIZE {
            return false;
        }
        self.get(row, col)
            && self.get(row, col + 1)
            && self.get(row + 1, col)
            && self.get(row + 1, col + 1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board [")?;
        for row in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", if self.get(row, col) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
