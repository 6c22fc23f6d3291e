// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour/mono splitter — partition an uploaded PDF into the pages that must go
// to a colour printer and the pages that can go to a mono printer.

use std::collections::BTreeSet;

use printprep_core::DocumentConfig;
use printprep_core::error::PrepError;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::reader::PdfReader;
use super::writer::PdfWriter;
use crate::integrity::hash_bytes;

/// One generated PDF plus what dispatch needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentArtifact {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Lowercase hex SHA-256 of `bytes`.
    pub sha256: String,
}

impl DocumentArtifact {
    fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        let sha256 = hash_bytes(&bytes);
        Self {
            bytes,
            page_count,
            sha256,
        }
    }
}

/// Result of a split, with an audit trail of which page numbers were used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitOutcome {
    pub bw: DocumentArtifact,
    pub color: DocumentArtifact,
    pub total_pages: usize,
    /// Page numbers that went to the colour document, ascending.
    pub color_pages: Vec<u32>,
    /// Requested numbers outside `1..=total_pages`, in request order.
    pub ignored_pages: Vec<u32>,
}

/// Splits documents into colour and black-and-white outputs.
///
/// Holds only configuration; every call is independent, so one splitter can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentSplitter {
    config: DocumentConfig,
}

impl DocumentSplitter {
    pub fn new(config: DocumentConfig) -> Self {
        Self { config }
    }

    /// Split `source` into `(bw_bytes, color_bytes)`.
    ///
    /// Pages whose 1-indexed number appears in `color_pages` go to the colour
    /// document, every other page to the mono document, both in source
    /// order. Numbers outside the document are ignored.
    pub fn split(
        &self,
        source: &[u8],
        color_pages: &[u32],
    ) -> Result<(Vec<u8>, Vec<u8>), PrepError> {
        let outcome = self.split_with_report(source, color_pages)?;
        Ok((outcome.bw.bytes, outcome.color.bytes))
    }

    /// Like [`DocumentSplitter::split`], but also reports page counts,
    /// digests, and which requested page numbers were dropped.
    #[instrument(skip_all, fields(bytes_len = source.len(), requested = color_pages.len()))]
    pub fn split_with_report(
        &self,
        source: &[u8],
        color_pages: &[u32],
    ) -> Result<SplitOutcome, PrepError> {
        let reader = PdfReader::from_bytes(source)?;
        let total_pages = reader.page_count();

        let (selected, ignored_pages) = validate_color_pages(color_pages, total_pages);
        if !ignored_pages.is_empty() {
            debug!(?ignored_pages, total_pages, "Dropping out-of-range colour pages");
        }

        info!(
            total_pages,
            color_pages = selected.len(),
            "Splitting PDF into colour and mono documents"
        );

        let (color_ids, bw_ids): (Vec<_>, Vec<_>) = reader
            .pages()
            .into_iter()
            .partition(|(page_number, _)| selected.contains(page_number));
        let color_ids: Vec<_> = color_ids.into_iter().map(|(_, page_id)| page_id).collect();
        let bw_ids: Vec<_> = bw_ids.into_iter().map(|(_, page_id)| page_id).collect();

        let mut bw = PdfWriter::new(&self.config);
        let mut color = PdfWriter::new(&self.config);
        bw.reserve_pages(&reader, &bw_ids);
        color.reserve_pages(&reader, &color_ids);

        for &page_id in &color_ids {
            color.append_page(&reader, page_id)?;
        }
        for &page_id in &bw_ids {
            bw.append_page(&reader, page_id)?;
        }

        let bw_pages = bw.page_count();
        let color_page_count = color.page_count();
        let bw = DocumentArtifact::new(bw.finish()?, bw_pages);
        let color = DocumentArtifact::new(color.finish()?, color_page_count);

        debug!(
            bw_pages,
            color_pages = color_page_count,
            bw_bytes = bw.bytes.len(),
            color_bytes = color.bytes.len(),
            "Split complete"
        );

        Ok(SplitOutcome {
            bw,
            color,
            total_pages,
            color_pages: selected.into_iter().collect(),
            ignored_pages,
        })
    }
}

/// Split with the default document configuration.
pub fn split(source: &[u8], color_pages: &[u32]) -> Result<(Vec<u8>, Vec<u8>), PrepError> {
    DocumentSplitter::default().split(source, color_pages)
}

/// Keep the page numbers inside `1..=total_pages`; return them as a set along
/// with the rejected numbers.
fn validate_color_pages(requested: &[u32], total_pages: usize) -> (BTreeSet<u32>, Vec<u32>) {
    let mut selected = BTreeSet::new();
    let mut ignored = Vec::new();

    for &page in requested {
        if page >= 1 && (page as usize) <= total_pages {
            selected.insert(page);
        } else {
            ignored.push(page);
        }
    }

    (selected, ignored)
}
