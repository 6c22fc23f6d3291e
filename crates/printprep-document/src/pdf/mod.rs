// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — reading uploads, copying pages, and writing split outputs.

pub mod reader;
pub mod splitter;
pub mod writer;

pub use reader::PdfReader;
pub use splitter::DocumentSplitter;
pub use writer::PdfWriter;
