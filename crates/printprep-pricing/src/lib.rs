// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printprep-pricing — Price quotes from print settings and a shop's tariff.

pub mod engine;

pub use engine::{compute_cost, mixed_color_surcharge};
