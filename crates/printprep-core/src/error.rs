// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the preparation pipeline.

use thiserror::Error;

/// Top-level error type for all preparation operations.
///
/// Pricing and grid packing never fail; only document handling and the
/// parsing of collaborator-supplied values produce errors.
#[derive(Debug, Error)]
pub enum PrepError {
    // -- Document errors --
    #[error("failed to load document: {0}")]
    DocumentLoad(String),

    #[error("failed to write document: {0}")]
    DocumentWrite(String),

    // -- Input errors --
    #[error("invalid value {value:?} for {field}")]
    InvalidSetting { field: &'static str, value: String },

    #[error("invalid tariff: {0}")]
    InvalidTariff(String),

    #[error("invalid page selection: {0}")]
    InvalidPageSelection(String),

    // -- Layout --
    #[error("cannot read image dimensions: {0}")]
    ImageProbe(String),

    // -- Serialisation --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrepError>;
