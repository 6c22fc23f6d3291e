// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printprep-document — Document processing for print dispatch.
//
// Loads an uploaded PDF and partitions its pages into a colour document and a
// black-and-white document, each an independent, print-ready PDF.

pub mod integrity;
pub mod pdf;

// Re-export the primary structs so callers can use `printprep_document::DocumentSplitter` etc.
pub use pdf::reader::PdfReader;
pub use pdf::splitter::{DocumentArtifact, DocumentSplitter, SplitOutcome, split};
pub use pdf::writer::PdfWriter;

#[cfg(test)]
pub(crate) mod fixtures;
