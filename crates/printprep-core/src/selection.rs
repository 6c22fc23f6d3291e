// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page selection parsing for the page-marking UI ("1-3, 5, 8").

use crate::error::{PrepError, Result};

/// Upper bound on how many page numbers one selection may expand to.
///
/// Far beyond any printable upload; it stops `"1-4294967295"` from
/// allocating billions of entries.
pub const MAX_SELECTED_PAGES: usize = 10_000;

/// Parse a comma-separated list of page numbers and inclusive ranges.
///
/// Numbers are returned in the order written; ranges expand ascending.
/// Range checking against a document is left to the consumer, so `0` and
/// numbers past the last page are accepted here. A selection that would
/// expand to more than [`MAX_SELECTED_PAGES`] numbers is rejected.
pub fn parse_page_selection(input: &str) -> Result<Vec<u32>> {
    let mut pages = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_number(start, token)?;
                let end = parse_number(end, token)?;
                if start > end {
                    return Err(PrepError::InvalidPageSelection(format!(
                        "range {token:?} runs backwards"
                    )));
                }
                let span = u64::from(end - start) + 1;
                check_budget(pages.len() as u64 + span, token)?;
                pages.extend(start..=end);
            }
            None => {
                let page = parse_number(token, token)?;
                check_budget(pages.len() as u64 + 1, token)?;
                pages.push(page);
            }
        }
    }

    Ok(pages)
}

fn check_budget(expanded: u64, token: &str) -> Result<()> {
    if expanded > MAX_SELECTED_PAGES as u64 {
        return Err(PrepError::InvalidPageSelection(format!(
            "{token:?} selects more than {MAX_SELECTED_PAGES} pages"
        )));
    }
    Ok(())
}

fn parse_number(raw: &str, token: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| PrepError::InvalidPageSelection(format!("{token:?} is not a page number")))
}
