use clap::{Parser, Subcommand};
use qr_forge::export::{png, text};
use qr_forge::validate::{corners, coverage, regions};
use qr_forge::{Board, Generator, RegionKind, validate};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrforge", version, about = "Hypothetical QR board generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for valid boards and print/save them
    Generate {
        /// Stop after this many accepted boards
        #[arg(long, default_value_t = 1)]
        limit: usize,
        /// Directory to write qr_N.txt artifacts into
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Also write a qr_N.png next to each text artifact
        #[arg(long)]
        png: bool,
        /// Pixels per module for PNG output
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Skip printing the boards themselves
        #[arg(long)]
        quiet: bool,
    },
    /// Check a saved board file against the five acceptance rules
    Validate {
        #[arg(long)]
        board: PathBuf,
    },
    /// Rasterize a saved board file to PNG
    Render {
        #[arg(long)]
        board: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 8)]
        scale: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            limit,
            out_dir,
            png,
            scale,
            quiet,
        } => generate_cmd(limit, out_dir.as_deref(), png, scale, quiet),
        Command::Validate { board } => validate_cmd(&board),
        Command::Render { board, out, scale } => render_cmd(&board, &out, scale),
    }
}

fn generate_cmd(limit: usize, out_dir: Option<&Path>, png: bool, scale: u32, quiet: bool) {
    let start = Instant::now();
    let boards = Generator::with_limit(limit).run();
    let elapsed = start.elapsed();

    if boards.is_empty() {
        println!("No valid board found with the given rules ({:.2?})", elapsed);
        return;
    }

    println!("Found {} valid board(s) in {:.2?}", boards.len(), elapsed);
    for (i, board) in boards.iter().enumerate() {
        if !quiet {
            println!("\nBoard {}:", i + 1);
            print!("{}", text::render_blocks(board));
        }
        if let Some(dir) = out_dir {
            match text::save_text(board, dir, i) {
                Ok(path) => println!("Saved board to {}", path.display()),
                Err(err) => eprintln!("Failed to save board {}: {}", i + 1, err),
            }
            if png {
                let path = dir.join(format!("qr_{}.png", i + 1));
                match png::save_png(board, &path, scale) {
                    Ok(()) => println!("Saved image to {}", path.display()),
                    Err(err) => eprintln!("Failed to save image {}: {}", i + 1, err),
                }
            }
        }
    }
}

fn validate_cmd(path: &Path) {
    let board = match text::load_text(path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Failed to load board {}: {}", path.display(), err);
            return;
        }
    };

    println!("Board: {}", path.display());
    print!("{}", text::render_blocks(&board));

    let filled_corners = corners::filled_corner_blocks(&board);
    println!(
        "Corner blocks filled: {}/4 (need exactly 3) -> {}",
        filled_corners,
        verdict(filled_corners == 3)
    );

    let min_row = (0..qr_forge::BOARD_SIZE)
        .map(|row| board.filled_in_row(row))
        .min()
        .unwrap_or(0);
    let min_col = (0..qr_forge::BOARD_SIZE)
        .map(|col| board.filled_in_col(col))
        .min()
        .unwrap_or(0);
    println!(
        "Sparsest row: {}, sparsest column: {} (need >= {}) -> {}",
        min_row,
        min_col,
        coverage::MIN_LINE_FILL,
        verdict(coverage::meets_line_minimums(&board))
    );

    report_pattern(&board, RegionKind::PatternA, "Pattern A");
    report_pattern(&board, RegionKind::PatternB, "Pattern B");

    println!("Overall: {}", verdict(validate::is_valid(&board)));
}

fn report_pattern(board: &Board, kind: RegionKind, label: &str) {
    let matches = regions::find_regions(board, kind);
    let spread = regions::spans_distinct_super_blocks(&matches);
    println!(
        "{}: {} match(es), distinct super-blocks: {} -> {}",
        label,
        matches.len(),
        spread,
        verdict(matches.len() >= regions::MIN_REGIONS && spread)
    );
    for region in matches.iter().take(10) {
        let (sb_row, sb_col) = region.super_block();
        println!(
            "  at ({}, {}) in super-block ({}, {})",
            region.row, region.col, sb_row, sb_col
        );
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok { "pass" } else { "FAIL" }
}

fn render_cmd(board_path: &Path, out: &Path, scale: u32) {
    let board = match text::load_text(board_path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Failed to load board {}: {}", board_path.display(), err);
            return;
        }
    };

    match png::save_png(&board, out, scale) {
        Ok(()) => println!("Saved image to {}", out.display()),
        Err(err) => eprintln!("Failed to save image {}: {}", out.display(), err),
    }
}
