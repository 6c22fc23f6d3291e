// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grid packer — pick the rows x cols arrangement that covers the most page
// area when each image is scaled uniformly into its own cell.
//
// Candidates are every row count from 1 up to a limit, each with just enough
// columns, followed by a near-square grid. Each image may be rotated 90° in
// its cell; that choice is made per image, not once for the whole page.

use printprep_core::{GridChoice, LayoutConfig, PaperSize, Rectangle};
use tracing::{debug, instrument, warn};

/// Row counts swept when the caller has no preference.
pub const DEFAULT_MAX_ROWS_TO_TRY: usize = 8;

/// Grid search with a fixed gap and row limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPacker {
    pub gap: f64,
    pub max_rows_to_try: usize,
}

impl Default for GridPacker {
    fn default() -> Self {
        Self {
            gap: 0.0,
            max_rows_to_try: DEFAULT_MAX_ROWS_TO_TRY,
        }
    }
}

impl GridPacker {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            gap: config.gap,
            max_rows_to_try: config.max_rows_to_try,
        }
    }

    /// Best grid for `rectangles` on a `page_w` x `page_h` page.
    pub fn pack(&self, rectangles: &[Rectangle], page_w: f64, page_h: f64) -> GridChoice {
        choose_best_grid(rectangles, page_w, page_h, self.gap, self.max_rows_to_try)
    }

    /// Best grid on a portrait sheet of `paper`, in millimetres. The gap is
    /// taken to be in millimetres too.
    pub fn pack_on_paper(&self, rectangles: &[Rectangle], paper: PaperSize) -> GridChoice {
        let (width_mm, height_mm) = paper.dimensions_mm();
        self.pack(rectangles, f64::from(width_mm), f64::from(height_mm))
    }
}

/// Candidate grids for `count` images, in the order they are scored.
///
/// May contain duplicates. Every candidate has at least `count` cells.
pub fn candidate_grids(count: usize, max_rows_to_try: usize) -> Vec<GridChoice> {
    if count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<GridChoice> = (1..=count.min(max_rows_to_try))
        .map(|rows| GridChoice::new(rows, count.div_ceil(rows)))
        .collect();

    let square_rows = ceil_sqrt(count);
    candidates.push(GridChoice::new(square_rows, count.div_ceil(square_rows)));

    candidates
}

/// Fraction of the page covered by the images under `grid`, or `None` when
/// the gaps leave no room for a cell.
pub fn score_grid(
    grid: GridChoice,
    rectangles: &[Rectangle],
    page_w: f64,
    page_h: f64,
    gap: f64,
) -> Option<f64> {
    let (cell_w, cell_h) = grid.cell_size(page_w, page_h, gap);
    if !(cell_w > 0.0 && cell_h > 0.0) {
        return None;
    }

    let covered: f64 = rectangles
        .iter()
        .map(|rect| best_area_in_cell(rect, cell_w, cell_h))
        .sum();

    Some(covered / (page_w * page_h))
}

/// Choose the grid with the highest utilisation.
///
/// Ties go to the earliest candidate. When no candidate fits on the page the
/// single-row grid `(1, k)` is returned.
#[instrument(skip(rectangles), fields(count = rectangles.len()))]
pub fn choose_best_grid(
    rectangles: &[Rectangle],
    page_w: f64,
    page_h: f64,
    gap: f64,
    max_rows_to_try: usize,
) -> GridChoice {
    let fallback = GridChoice::new(1, rectangles.len());
    if rectangles.is_empty() {
        debug!("Nothing to place");
        return fallback;
    }

    let mut best: Option<(GridChoice, f64)> = None;

    for candidate in candidate_grids(rectangles.len(), max_rows_to_try) {
        let Some(score) = score_grid(candidate, rectangles, page_w, page_h, gap) else {
            debug!(rows = candidate.rows, cols = candidate.cols, "Grid does not fit");
            continue;
        };
        debug!(rows = candidate.rows, cols = candidate.cols, score, "Grid scored");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((grid, score)) => {
            debug!(rows = grid.rows, cols = grid.cols, score, "Grid chosen");
            grid
        }
        None => {
            warn!(
                page_w,
                page_h,
                gap,
                "No grid fits on the page, falling back to a single row"
            );
            fallback
        }
    }
}

/// Largest area `rect` covers when scaled uniformly into a cell, upright or
/// rotated. Degenerate rectangles cover nothing.
fn best_area_in_cell(rect: &Rectangle, cell_w: f64, cell_h: f64) -> f64 {
    let (w, h) = (rect.width, rect.height);
    if !(w > 0.0 && h > 0.0) {
        return 0.0;
    }

    let upright = (cell_w / w).min(cell_h / h);
    let rotated = (cell_w / h).min(cell_h / w);
    let scale = upright.max(rotated);
    scale * scale * rect.area()
}

/// Smallest `s` with `s * s >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut s = (n as f64).sqrt() as usize;
    while s * s < n {
        s += 1;
    }
    while s > 1 && (s - 1) * (s - 1) >= n {
        s -= 1;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(count: usize, side: f64) -> Vec<Rectangle> {
        vec![Rectangle::new(side, side); count]
    }

    #[test]
    fn single_square_fills_one_cell() {
        let grid = choose_best_grid(&squares(1, 10.0), 100.0, 100.0, 5.0, 8);
        assert_eq!(grid, GridChoice::new(1, 1));
    }

    #[test]
    fn candidates_sweep_rows_then_square() {
        let grids = candidate_grids(5, 8);
        let pairs: Vec<(usize, usize)> = grids.iter().map(|g| (g.rows, g.cols)).collect();
        assert_eq!(pairs, vec![(1, 5), (2, 3), (3, 2), (4, 2), (5, 1), (3, 2)]);
    }

    #[test]
    fn square_candidate_added_beyond_row_limit() {
        let grids = candidate_grids(20, 2);
        assert_eq!(grids.len(), 3);
        assert_eq!(grids[2], GridChoice::new(5, 4));

        let grid = choose_best_grid(&squares(20, 10.0), 100.0, 500.0, 0.0, 2);
        assert_eq!(grid, GridChoice::new(5, 4));
    }

    #[test]
    fn tie_keeps_first_candidate() {
        // (1, 2) and (2, 1) both cover half of a square page.
        let grid = choose_best_grid(&squares(2, 10.0), 100.0, 100.0, 0.0, 8);
        assert_eq!(grid, GridChoice::new(1, 2));
    }

    #[test]
    fn landscape_page_prefers_one_row() {
        let grid = choose_best_grid(&squares(3, 10.0), 300.0, 100.0, 0.0, 8);
        assert_eq!(grid, GridChoice::new(1, 3));
    }

    #[test]
    fn four_squares_make_two_by_two() {
        let grid = choose_best_grid(&squares(4, 7.0), 100.0, 100.0, 0.0, 8);
        assert_eq!(grid, GridChoice::new(2, 2));
    }

    #[test]
    fn each_image_rotates_independently() {
        // A wide image in a tall cell only fills the cell once rotated.
        let score = score_grid(
            GridChoice::new(1, 1),
            &[Rectangle::new(100.0, 50.0)],
            50.0,
            100.0,
            0.0,
        )
        .unwrap();
        assert_eq!(score, 1.0);

        let mixed = [Rectangle::new(100.0, 50.0), Rectangle::new(50.0, 100.0)];
        let score = score_grid(GridChoice::new(1, 2), &mixed, 100.0, 100.0, 0.0).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn no_feasible_grid_falls_back_to_single_row() {
        let grid = choose_best_grid(&squares(3, 10.0), 100.0, 100.0, 60.0, 8);
        assert_eq!(grid, GridChoice::new(1, 3));
        assert!(score_grid(grid, &squares(3, 10.0), 100.0, 100.0, 60.0).is_none());
    }

    #[test]
    fn chosen_grid_always_has_enough_cells() {
        for count in 1..=40 {
            let rects: Vec<Rectangle> = (0..count)
                .map(|i| Rectangle::new(5.0 + (i % 7) as f64 * 3.0, 4.0 + (i % 5) as f64 * 6.0))
                .collect();
            for max_rows in [1, 3, 8] {
                let grid = choose_best_grid(&rects, 210.0, 297.0, 4.0, max_rows);
                assert!(grid.capacity() >= count, "{count} images in {grid:?}");
            }
        }
    }

    #[test]
    fn degenerate_rectangle_scores_zero() {
        let score = score_grid(
            GridChoice::new(1, 1),
            &[Rectangle::new(0.0, 10.0)],
            100.0,
            100.0,
            0.0,
        );
        assert_eq!(score, Some(0.0));
    }

    #[test]
    fn empty_input_returns_empty_row() {
        assert_eq!(choose_best_grid(&[], 100.0, 100.0, 0.0, 8), GridChoice::new(1, 0));
    }

    #[test]
    fn repeated_calls_agree() {
        let rects = [
            Rectangle::new(3.0, 4.0),
            Rectangle::new(16.0, 9.0),
            Rectangle::new(1.0, 1.0),
        ];
        let first = choose_best_grid(&rects, 210.0, 297.0, 3.0, 8);
        let second = choose_best_grid(&rects, 210.0, 297.0, 3.0, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn packer_uses_configured_gap() {
        // Without gaps 2x2 wins on a 180x100 page (cells 90x50 vs 45x100).
        // A 25 gap shrinks the 2x2 cells to 52.5x12.5 and the 1x4 cells to
        // 13.75x50, and leaves no room for 3x2 or 4x1.
        let rects = squares(4, 1.0);
        let tight = GridPacker::from_config(&LayoutConfig {
            max_rows_to_try: 8,
            gap: 0.0,
        });
        let spaced = GridPacker::from_config(&LayoutConfig {
            max_rows_to_try: 8,
            gap: 25.0,
        });

        assert_eq!(tight.pack(&rects, 180.0, 100.0), GridChoice::new(2, 2));
        assert_eq!(spaced.pack(&rects, 180.0, 100.0), GridChoice::new(1, 4));
        assert!(score_grid(GridChoice::new(3, 2), &rects, 180.0, 100.0, 25.0).is_none());
    }

    #[test]
    fn paper_size_sets_the_page() {
        // A4 is portrait, so two squares stack: 210x148.5 cells beat 105x297.
        let packer = GridPacker::default();
        let rects = squares(2, 10.0);
        assert_eq!(packer.pack_on_paper(&rects, PaperSize::A4), GridChoice::new(2, 1));
        assert_eq!(
            packer.pack_on_paper(&rects, PaperSize::A3),
            packer.pack(&rects, 297.0, 420.0)
        );
    }

    #[test]
    fn ceil_sqrt_is_exact() {
        let expected = [(1, 1), (2, 2), (4, 2), (5, 3), (9, 3), (10, 4), (16, 4), (17, 5)];
        for (n, s) in expected {
            assert_eq!(ceil_sqrt(n), s, "ceil_sqrt({n})");
        }
    }
}
