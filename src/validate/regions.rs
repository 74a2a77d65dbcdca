use crate::models::{BOARD_SIZE, Board, Region, RegionKind};

/// Minimum number of template matches required per pattern
pub const MIN_REGIONS: usize = 2;

/// Minimum number of distinct super-blocks the matches must span
pub const MIN_DISTINCT_SUPER_BLOCKS: usize = 2;

/// Collect every 2x2 block matching the given template, scanning all
/// top-left positions in [0, 10] x [0, 10]
pub fn find_regions(board: &Board, kind: RegionKind) -> Vec<Region> {
    let mut regions = Vec::new();
    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            if kind.matches(board, row, col) {
                regions.push(Region { row, col, kind });
            }
        }
    }
    regions
}

/// Check whether the matches collectively span at least
/// `MIN_DISTINCT_SUPER_BLOCKS` distinct 3x3 super-blocks
pub fn spans_distinct_super_blocks(regions: &[Region]) -> bool {
    let mut seen: Vec<(usize, usize)> = Vec::new();
    for region in regions {
        let id = region.super_block();
        if !seen.contains(&id) {
            seen.push(id);
            if seen.len() >= MIN_DISTINCT_SUPER_BLOCKS {
                return true;
            }
        }
    }
    false
}

/// Checks 3-5: at least `MIN_REGIONS` matches of each pattern, and each
/// pattern's matches spread over distinct super-blocks
pub fn patterns_well_distributed(board: &Board) -> bool {
    let pattern_a = find_regions(board, RegionKind::PatternA);
    if pattern_a.len() < MIN_REGIONS || !spans_distinct_super_blocks(&pattern_a) {
        return false;
    }

    let pattern_b = find_regions(board, RegionKind::PatternB);
    pattern_b.len() >= MIN_REGIONS && spans_distinct_super_blocks(&pattern_b)
}
