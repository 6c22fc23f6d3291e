// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — load an uploaded document and walk its pages in order using
// the `lopdf` crate.

use lopdf::{Dictionary, Document, Object, ObjectId};
use printprep_core::error::PrepError;
use tracing::{debug, instrument};

/// Page attributes a page may inherit from its ancestors in the page tree.
pub(crate) const INHERITABLE_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Guard against malformed page trees whose /Parent chain loops.
const MAX_TREE_DEPTH: usize = 64;

/// Read-only view of an uploaded PDF.
///
/// Wraps `lopdf::Document`; the caller's byte buffer is only borrowed while
/// parsing and never modified.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    /// Create a reader from raw PDF bytes already in memory.
    ///
    /// Fails with [`PrepError::DocumentLoad`] when the bytes are not a
    /// readable PDF.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, PrepError> {
        let document = Document::load_mem(data).map_err(|err| {
            PrepError::DocumentLoad(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page object ids paired with their 1-indexed page numbers, ascending.
    pub fn pages(&self) -> Vec<(u32, ObjectId)> {
        // get_pages() is a BTreeMap keyed by page number, so this is ordered.
        self.document.get_pages().into_iter().collect()
    }

    /// Borrow the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Look up an inheritable attribute on the nearest ancestor of a page
    /// that defines it. Returns `None` if the page itself should be used or
    /// no ancestor has it.
    pub(crate) fn inherited_attribute(&self, page: &Dictionary, key: &[u8]) -> Option<&Object> {
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;

        while let Some(node_id) = parent {
            if depth == MAX_TREE_DEPTH {
                break;
            }
            let node = self.document.get_dictionary(node_id).ok()?;
            if let Ok(value) = node.get(key) {
                return Some(value);
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }

        None
    }
}
