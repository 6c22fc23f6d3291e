// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printprep — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod money;
pub mod selection;
pub mod types;

pub use config::{DocumentConfig, LayoutConfig, PrepConfig};
pub use error::PrepError;
pub use money::Money;
pub use selection::{MAX_SELECTED_PAGES, parse_page_selection};
pub use types::*;
