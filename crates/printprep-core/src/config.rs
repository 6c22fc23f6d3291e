// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Settings for the whole preparation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

impl PrepConfig {
    /// Parse a configuration document. Missing sections take their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Multi-image page layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Largest row count swept when searching for a grid.
    pub max_rows_to_try: usize,
    /// Spacing between cells and around the page edge, in page units.
    pub gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_rows_to_try: 8,
            gap: 0.0,
        }
    }
}

/// Settings for generated PDF artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// PDF header version written on split outputs.
    pub pdf_version: String,
    /// Compress content streams of the outputs.
    pub compress_output: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            pdf_version: "1.5".to_string(),
            compress_output: false,
        }
    }
}
