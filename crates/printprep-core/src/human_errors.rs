// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for customers and shop staff.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how the checkout UI presents it.

use crate::error::PrepError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The customer must change something (re-upload, fix a page list).
    ActionRequired,
    /// Retrying the same input will not help; the shop must fix its data.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether resubmitting the same request could succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `PrepError` into a `HumanError`.
pub fn humanize_error(err: &PrepError) -> HumanError {
    match err {
        // -- Document errors --
        PrepError::DocumentLoad(_) => HumanError {
            message: "This file could not be processed.".into(),
            suggestion: "The file may be damaged or not a PDF. Please export it as a PDF again and re-upload it.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PrepError::DocumentWrite(detail) => HumanError {
            message: "We couldn't prepare your pages for printing.".into(),
            suggestion: format!("Please try a different copy of the file. (Detail: {detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Input errors --
        PrepError::InvalidSetting { field, value } => HumanError {
            message: "One of the print options isn't recognised.".into(),
            suggestion: format!("Please choose the {} again. ({value:?} is not a valid choice.)", field.replace('_', " ")),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PrepError::InvalidTariff(_) => HumanError {
            message: "This shop's prices are set up incorrectly.".into(),
            suggestion: "Please pick another shop or contact the shop owner.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PrepError::InvalidPageSelection(detail) => HumanError {
            message: "We couldn't understand the colour page list.".into(),
            suggestion: format!("Use page numbers and ranges separated by commas, like 1-3, 5. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PrepError::ImageProbe(_) => HumanError {
            message: "One of your images could not be read.".into(),
            suggestion: "Please upload the image as a JPEG or PNG.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PrepError::Serialization(_) => HumanError {
            message: "Something went wrong reading the shop's settings.".into(),
            suggestion: "Please pick another shop or contact the shop owner.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
