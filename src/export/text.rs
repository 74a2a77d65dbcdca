use crate::models::{BOARD_SIZE, Board};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Render a board for terminal display using solid block characters
/// (two characters per cell). Display only; empty cells are plain spaces,
/// so this form is not meant to be parsed back.
pub fn render_blocks(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1) * 3);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push_str(if board.get(row, col) { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Render a board with `# ` marks for filled cells and `. ` for empty ones.
/// This is the lossless artifact form: `parse_text` inverts it exactly.
pub fn render_marks(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push_str(if board.get(row, col) { "# " } else { ". " });
        }
        out.push('\n');
    }
    out
}

/// Parse a mark-rendered board back into a `Board`.
///
/// Whitespace is ignored; exactly 144 `#`/`.` glyphs are expected in
/// row-major order. Anything else is reported as `InvalidData`.
pub fn parse_text(text: &str) -> io::Result<Board> {
    let mut board = Board::new();
    let mut index = 0usize;

    for ch in text.chars() {
        let value = match ch {
            '#' => true,
            '.' => false,
            c if c.is_whitespace() => continue,
            c => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unexpected character {:?} in board text", c),
                ));
            }
        };
        if index >= BOARD_SIZE * BOARD_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "board text has more than 144 cells",
            ));
        }
        board.set(index / BOARD_SIZE, index % BOARD_SIZE, value);
        index += 1;
    }

    if index != BOARD_SIZE * BOARD_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("board text has {} cells, expected 144", index),
        ));
    }
    Ok(board)
}

/// Artifact file name for the nth accepted board (1-based on disk)
pub fn artifact_name(ordinal: usize) -> String {
    format!("qr_{}.txt", ordinal + 1)
}

/// Write the mark rendering of a board to `dir/qr_{ordinal+1}.txt` and
/// return the written path
pub fn save_text(board: &Board, dir: &Path, ordinal: usize) -> io::Result<PathBuf> {
    let path = dir.join(artifact_name(ordinal));
    fs::write(&path, render_marks(board))?;
    Ok(path)
}

/// Read and parse a board file written by `save_text`
pub fn load_text(path: &Path) -> io::Result<Board> {
    parse_text(&fs::read_to_string(path)?)
}
