// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — assemble a new document from pages copied out of a source PDF.
//
// Each writer owns a fresh lopdf document with its own catalog and page tree.
// Pages are deep-copied, so the output shares nothing with the source and can
// be serialised, stored, or sent to a printer on its own. References to source
// pages that belong to a different output (link destinations, mostly) become
// null rather than dragging those pages in.

use std::collections::{BTreeMap, BTreeSet};

use lopdf::{Dictionary, Document, Object, ObjectId};
use printprep_core::DocumentConfig;
use printprep_core::error::PrepError;
use tracing::{debug, instrument, warn};

use super::reader::{INHERITABLE_KEYS, PdfReader};

/// Builds one output PDF page by page.
pub struct PdfWriter {
    /// The document being assembled.
    document: Document,
    /// Id of the /Pages root node.
    pages_id: ObjectId,
    /// Page references in output order.
    kids: Vec<Object>,
    /// Source object id -> output object id, so shared resources (fonts,
    /// images) are written once per output.
    copied: BTreeMap<ObjectId, ObjectId>,
    /// Source pages that will not be part of this output.
    excluded_pages: BTreeSet<ObjectId>,
    compress: bool,
}

impl PdfWriter {
    /// Create an empty document with a catalog and an empty page tree.
    pub fn new(config: &DocumentConfig) -> Self {
        let mut document = Document::with_version(config.pdf_version.as_str());

        let pages_id = document.new_object_id();
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = document.add_object(Object::Dictionary(catalog));
        document.trailer.set("Root", Object::Reference(catalog_id));

        Self {
            document,
            pages_id,
            kids: Vec::new(),
            copied: BTreeMap::new(),
            excluded_pages: BTreeSet::new(),
            compress: config.compress_output,
        }
    }

    /// Declare up front which pages of `source` this output will hold.
    ///
    /// Output ids are reserved for `selected`, so a link to a page that is
    /// appended later points at its copy. Every other source page is
    /// excluded: references to it are written as null.
    pub fn reserve_pages(&mut self, source: &PdfReader, selected: &[ObjectId]) {
        for &page_id in selected {
            if !self.copied.contains_key(&page_id) {
                let new_id = self.document.new_object_id();
                self.copied.insert(page_id, new_id);
            }
        }
        self.excluded_pages = source
            .pages()
            .into_iter()
            .map(|(_, page_id)| page_id)
            .filter(|page_id| !self.copied.contains_key(page_id))
            .collect();
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Deep-copy page `page_id` of `source` and append it as the last page.
    ///
    /// Attributes the page inherits from the source page tree are written
    /// onto the copy, since the copy hangs off a different tree.
    pub fn append_page(&mut self, source: &PdfReader, page_id: ObjectId) -> Result<(), PrepError> {
        let page = source.document().get_dictionary(page_id).map_err(|err| {
            PrepError::DocumentLoad(format!("cannot read page object {:?}: {}", page_id, err))
        })?;

        // Reserve the id first so back-references to this page (e.g. an
        // annotation's /P) resolve to the copy instead of recursing.
        let new_id = match self.copied.get(&page_id) {
            Some(reserved) => *reserved,
            None => {
                let new_id = self.document.new_object_id();
                self.copied.insert(page_id, new_id);
                new_id
            }
        };
        self.excluded_pages.remove(&page_id);

        let mut new_page = self.copy_dictionary(source.document(), page);
        for key in INHERITABLE_KEYS {
            if new_page.has(key) {
                continue;
            }
            if let Some(value) = source.inherited_attribute(page, key) {
                let value = self.copy_object(source.document(), value);
                new_page.set(key.to_vec(), value);
            }
        }
        new_page.set("Parent", Object::Reference(self.pages_id));

        self.document
            .objects
            .insert(new_id, Object::Dictionary(new_page));
        self.kids.push(Object::Reference(new_id));
        Ok(())
    }

    /// Finalise the page tree and serialise the document.
    #[instrument(skip(self), fields(pages = self.kids.len()))]
    pub fn finish(mut self) -> Result<Vec<u8>, PrepError> {
        let count = self.kids.len() as i64;
        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(self.kids));
        pages.set("Count", Object::Integer(count));
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        if self.compress {
            self.document.compress();
        }

        let mut output = Vec::new();
        self.document.save_to(&mut output).map_err(|err| {
            PrepError::DocumentWrite(format!("failed to serialise PDF: {}", err))
        })?;

        debug!(output_bytes = output.len(), "PDF written");
        Ok(output)
    }

    // -- Helpers --------------------------------------------------------------

    /// Copy a dictionary, skipping /Parent so the source page tree is never
    /// pulled into the output. Page parents are patched by the caller.
    fn copy_dictionary(&mut self, source: &Document, dict: &Dictionary) -> Dictionary {
        let mut new_dict = Dictionary::new();
        for (key, value) in dict.iter() {
            if key == b"Parent" {
                continue;
            }
            let cloned_value = self.copy_object(source, value);
            new_dict.set(key.clone(), cloned_value);
        }
        new_dict
    }

    /// Deep-copy a single lopdf Object, resolving references through the
    /// `copied` table.
    fn copy_object(&mut self, source: &Document, object: &Object) -> Object {
        match object {
            Object::Dictionary(dict) => Object::Dictionary(self.copy_dictionary(source, dict)),
            Object::Array(arr) => Object::Array(
                arr.iter()
                    .map(|item| self.copy_object(source, item))
                    .collect(),
            ),
            Object::Reference(ref_id) => self.copy_reference(source, *ref_id),
            Object::Stream(stream) => {
                let mut new_stream = stream.clone();
                new_stream.dict = self.copy_dictionary(source, &stream.dict);
                Object::Stream(new_stream)
            }
            // Boolean, Integer, Real, String, Name, Null.
            other => other.clone(),
        }
    }

    fn copy_reference(&mut self, source: &Document, ref_id: ObjectId) -> Object {
        if let Some(new_id) = self.copied.get(&ref_id) {
            return Object::Reference(*new_id);
        }
        if self.excluded_pages.contains(&ref_id) {
            debug!(?ref_id, "Reference to a page outside this output, using Null");
            return Object::Null;
        }

        match source.get_object(ref_id) {
            Ok(referenced) => {
                // Register before recursing so reference cycles terminate.
                let new_id = self.document.new_object_id();
                self.copied.insert(ref_id, new_id);
                let cloned = self.copy_object(source, referenced);
                self.document.objects.insert(new_id, cloned);
                Object::Reference(new_id)
            }
            Err(err) => {
                warn!(?ref_id, %err, "Cannot resolve reference, using Null");
                Object::Null
            }
        }
    }
}
