// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printprep-layout — Choose how several images share one printed page.
//
// The grid search only decides rows and columns; placing and rendering the
// images into the cells is left to the page-composition step.

pub mod grid;
pub mod measure;

pub use grid::{DEFAULT_MAX_ROWS_TO_TRY, GridPacker, candidate_grids, choose_best_grid, score_grid};
pub use measure::{rectangle_from_image, rectangles_from_images};
