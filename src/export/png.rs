use crate::models::{BOARD_SIZE, Board};
use image::{GrayImage, ImageResult, Luma};
use std::path::Path;

/// Width of the white quiet border, in modules
pub const QUIET_BORDER: u32 = 1;

const BLACK: Luma<u8> = Luma([0u8]);
const WHITE: Luma<u8> = Luma([255u8]);

/// Rasterize a board into a grayscale image: filled cells become black
/// modules of `scale` x `scale` pixels, surrounded by a quiet border.
pub fn board_image(board: &Board, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let side = (BOARD_SIZE as u32 + 2 * QUIET_BORDER) * scale;
    let mut img = GrayImage::from_pixel(side, side, WHITE);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.get(row, col) {
                continue;
            }
            let x0 = (col as u32 + QUIET_BORDER) * scale;
            let y0 = (row as u32 + QUIET_BORDER) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, BLACK);
                }
            }
        }
    }
    img
}

/// Rasterize a board and write it as a PNG file
pub fn save_png(board: &Board, path: &Path, scale: u32) -> ImageResult<()> {
    board_image(board, scale).save(path)
}
