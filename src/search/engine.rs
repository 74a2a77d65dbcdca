/// Depth-first backtracking over the 144 cell positions in row-major order
use crate::models::board::CELL_COUNT;
use crate::models::{BOARD_SIZE, Board};
use crate::search::pruning::branch_is_viable;
use crate::validate;

/// All mutable state of one search run: the board under construction, the
/// running row/column counts, and the capped solution set. Owned by the
/// top-level call, so concurrent or repeated runs never share state.
struct SearchContext {
    board: Board,
    row_filled: [usize; BOARD_SIZE],
    col_filled: [usize; BOARD_SIZE],
    solutions: Vec<Board>,
    limit: usize,
}

impl SearchContext {
    fn new(limit: usize) -> Self {
        Self {
            board: Board::new(),
            row_filled: [0; BOARD_SIZE],
            col_filled: [0; BOARD_SIZE],
            solutions: Vec::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Recurse from cell position `pos` (row-major, 0..=144).
    ///
    /// Values are tried 0 before 1, which makes the enumeration order and
    /// therefore the first accepted board deterministic.
    fn explore(&mut self, pos: usize) {
        if self.solutions.len() >= self.limit {
            return; // Global cutoff, propagates up through every level
        }

        if pos == CELL_COUNT {
            if validate::is_valid(&self.board) {
                self.solutions.push(self.board.clone());
            }
            return;
        }

        let row = pos / BOARD_SIZE;
        let col = pos % BOARD_SIZE;

        for value in [false, true] {
            // Commit the cell and keep the running counts in lock-step
            self.board.set(row, col, value);
            if value {
                self.row_filled[row] += 1;
                self.col_filled[col] += 1;
            }

            if branch_is_viable(row, col, self.row_filled[row], self.col_filled[col]) {
                self.explore(pos + 1);
            }

            // Undo the count update before the sibling branch
            if value {
                self.row_filled[row] -= 1;
                self.col_filled[col] -= 1;
            }

            if self.solutions.len() >= self.limit {
                break;
            }
        }

        // Reset the cell unconditionally so ancestors never observe a stale
        // value from an abandoned branch
        self.board.set(row, col, false);
    }
}

/// Entry points for the capped board search
pub struct BoardSearch;

impl BoardSearch {
    /// Enumerate boards in the fixed traversal order and collect up to
    /// `max_solutions` accepted ones. `max_solutions == 0` explores nothing.
    pub fn run(max_solutions: usize) -> Vec<Board> {
        let mut ctx = SearchContext::new(max_solutions);
        ctx.explore(0);
        ctx.solutions
    }

    /// Stop at the first accepted board
    pub fn first() -> Option<Board> {
        Self::run(1).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cap_returns_empty() {
        assert!(BoardSearch::run(0).is_empty());
    }

    #[test]
    fn test_first_board_is_accepted() {
        let board = BoardSearch::first().expect("search space contains valid boards");
        assert!(validate::is_valid(&board));
    }

    #[test]
    fn test_context_starts_clean() {
        let ctx = SearchContext::new(4);
        assert_eq!(ctx.row_filled, [0; BOARD_SIZE]);
        assert_eq!(ctx.col_filled, [0; BOARD_SIZE]);
        assert!(ctx.solutions.is_empty());
    }
}
