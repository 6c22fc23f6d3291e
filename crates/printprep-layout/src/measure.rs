// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image measurement — read pixel dimensions from encoded image headers so the
// grid search can run without decoding any pixels.

use std::io::Cursor;

use image::ImageReader;
use printprep_core::Rectangle;
use printprep_core::error::PrepError;
use tracing::{debug, instrument};

/// Footprint of one encoded image (JPEG, PNG, ...) in pixels.
///
/// Pixel units are fine for the grid search: every image is rescaled to its
/// cell, so only the aspect ratio matters.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn rectangle_from_image(data: &[u8]) -> Result<Rectangle, PrepError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|err| PrepError::ImageProbe(format!("failed to sniff image format: {}", err)))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|err| PrepError::ImageProbe(format!("failed to read image header: {}", err)))?;

    debug!(width, height, "Image measured");
    Ok(Rectangle::new(f64::from(width), f64::from(height)))
}

/// Measure a batch of images, failing on the first one that cannot be read.
pub fn rectangles_from_images(images: &[&[u8]]) -> Result<Vec<Rectangle>, PrepError> {
    images
        .iter()
        .enumerate()
        .map(|(index, data)| {
            rectangle_from_image(data).map_err(|err| match err {
                PrepError::ImageProbe(detail) => {
                    PrepError::ImageProbe(format!("image #{}: {}", index + 1, detail))
                }
                other => other,
            })
        })
        .collect()
}
