// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test fixtures: small PDFs whose pages can be told apart after splitting.
//
// Page N has a MediaBox width of `page_width(N)`. Resources live on the page
// tree root so copies must pick them up through inheritance.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// MediaBox width given to page `n` (1-indexed).
pub(crate) fn page_width(n: u32) -> i64 {
    100 + i64::from(n)
}

/// Build a PDF with `pages` pages sharing one font.
pub(crate) fn numbered_pdf(pages: u32) -> Vec<u8> {
    linked_pdf(pages, &[])
}

/// Like [`numbered_pdf`], plus a link annotation on page `from` whose /Dest
/// is page `to` for every `(from, to)` in `links`.
pub(crate) fn linked_pdf(pages: u32, links: &[(u32, u32)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_ids: Vec<ObjectId> = (0..pages).map(|_| doc.new_object_id()).collect();

    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(Object::Dictionary(font));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let mut kids = Vec::new();
    for n in 1..=pages {
        let content = format!("BT /F1 24 Tf 20 100 Td (Page {n}) Tj ET");
        let content_id = doc.add_object(Object::Stream(Stream::new(
            Dictionary::new(),
            content.into_bytes(),
        )));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(page_width(n)),
                Object::Integer(200),
            ]),
        );
        page.set("Contents", Object::Reference(content_id));

        let annots: Vec<Object> = links
            .iter()
            .filter(|(from, _)| *from == n)
            .map(|(_, to)| {
                let mut link = Dictionary::new();
                link.set("Type", Object::Name(b"Annot".to_vec()));
                link.set("Subtype", Object::Name(b"Link".to_vec()));
                link.set(
                    "Rect",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(10),
                        Object::Integer(10),
                    ]),
                );
                link.set("P", Object::Reference(page_ids[n as usize - 1]));
                link.set(
                    "Dest",
                    Object::Array(vec![
                        Object::Reference(page_ids[*to as usize - 1]),
                        Object::Name(b"Fit".to_vec()),
                    ]),
                );
                Object::Reference(doc.add_object(Object::Dictionary(link)))
            })
            .collect();
        if !annots.is_empty() {
            page.set("Annots", Object::Array(annots));
        }

        let page_id = page_ids[n as usize - 1];
        doc.objects.insert(page_id, Object::Dictionary(page));
        kids.push(Object::Reference(page_id));
    }

    let mut tree = Dictionary::new();
    tree.set("Type", Object::Name(b"Pages".to_vec()));
    tree.set("Kids", Object::Array(kids));
    tree.set("Count", Object::Integer(i64::from(pages)));
    tree.set("Resources", Object::Dictionary(resources));
    doc.objects.insert(pages_id, Object::Dictionary(tree));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut output = Vec::new();
    doc.save_to(&mut output).unwrap();
    output
}

/// MediaBox widths of every page in `bytes`, in page order.
pub(crate) fn page_widths(bytes: &[u8]) -> Vec<i64> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let page = doc.get_dictionary(*page_id).unwrap();
            page.get(b"MediaBox").unwrap().as_array().unwrap()[2]
                .as_i64()
                .unwrap()
        })
        .collect()
}

/// Widths expected for the given page numbers.
pub(crate) fn widths_of(pages: &[u32]) -> Vec<i64> {
    pages.iter().map(|n| page_width(*n)).collect()
}

/// For every page in `bytes`, the page number each link annotation points
/// at, or `None` when the destination is not a page of this document.
pub(crate) fn link_targets(bytes: &[u8]) -> Vec<Vec<Option<u32>>> {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let number_of = |id: ObjectId| {
        pages
            .iter()
            .find(|(_, page_id)| **page_id == id)
            .map(|(number, _)| *number)
    };

    pages
        .values()
        .map(|page_id| {
            let page = doc.get_dictionary(*page_id).unwrap();
            let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
                return Vec::new();
            };
            annots
                .iter()
                .map(|annot| {
                    let link = doc.get_dictionary(annot.as_reference().unwrap()).unwrap();
                    let dest = link.get(b"Dest").unwrap().as_array().unwrap();
                    dest[0].as_reference().ok().and_then(number_of)
                })
                .collect()
        })
        .collect()
}

/// Number of `/Type /Page` objects in `bytes`, reachable or not.
pub(crate) fn count_page_objects(bytes: &[u8]) -> usize {
    let doc = Document::load_mem(bytes).unwrap();
    doc.objects
        .values()
        .filter(|obj| {
            obj.as_dict()
                .and_then(|d| d.get(b"Type"))
                .and_then(Object::as_name)
                .map(|name| name == b"Page")
                .unwrap_or(false)
        })
        .count()
}

/// Number of stream objects (page contents here) in `bytes`.
pub(crate) fn count_streams(bytes: &[u8]) -> usize {
    let doc = Document::load_mem(bytes).unwrap();
    doc.objects
        .values()
        .filter(|obj| matches!(obj, Object::Stream(_)))
        .count()
}
