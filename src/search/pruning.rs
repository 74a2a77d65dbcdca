use crate::models::BOARD_SIZE;
use crate::validate::coverage::MIN_LINE_FILL;

/// Decide whether the branch just committed at (row, col) can still reach
/// the coverage minimum.
///
/// `row_filled` and `col_filled` are the running counts including the cell
/// just committed. The remaining cells in the row are those with column
/// index > col, and symmetrically for the column. The bound is a necessary
/// condition only: a branch it keeps may still fail full validation, but a
/// branch it drops can never be completed into a valid board.
pub fn branch_is_viable(row: usize, col: usize, row_filled: usize, col_filled: usize) -> bool {
    let row_remaining = BOARD_SIZE - 1 - col;
    let col_remaining = BOARD_SIZE - 1 - row;
    row_filled + row_remaining >= MIN_LINE_FILL && col_filled + col_remaining >= MIN_LINE_FILL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_viable_until_column_seven() {
        // With no fills yet, 5 cells must still be reachable in the row
        assert!(branch_is_viable(0, 6, 0, 5)); // 0 + 5 remaining == 5
        assert!(!branch_is_viable(0, 7, 0, 5)); // 0 + 4 remaining < 5
    }

    #[test]
    fn test_column_bound_is_symmetric() {
        assert!(branch_is_viable(6, 0, 5, 0));
        assert!(!branch_is_viable(7, 0, 5, 0));
    }

    #[test]
    fn test_filled_lines_always_viable() {
        // Once a line holds 5 cells the bound can never trip for it
        assert!(branch_is_viable(11, 11, 5, 5));
        assert!(branch_is_viable(11, 11, 12, 12));
    }

    #[test]
    fn test_last_cell_needs_full_counts() {
        // At (11, 11) nothing remains, so both counts must already be there
        assert!(!branch_is_viable(11, 11, 4, 5));
        assert!(!branch_is_viable(11, 11, 5, 4));
    }
}
