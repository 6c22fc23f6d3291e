// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for print-job preparation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrepError;
use crate::money::Money;

/// Normalise a collaborator-supplied keyword: trimmed, lowercase, with `_`
/// and spaces folded into `-`.
fn normalise_keyword(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Paper sizes a shop can quote for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A3 => (297, 420),
        }
    }
}

impl FromStr for PaperSize {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_keyword(s).as_str() {
            "a4" => Ok(Self::A4),
            "a3" => Ok(Self::A3),
            _ => Err(PrepError::InvalidSetting {
                field: "paper_size",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => f.write_str("A4"),
            Self::A3 => f.write_str("A3"),
        }
    }
}

/// Single- or double-sided printing. Affects the per-page rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintFormat {
    SingleSided,
    DoubleSided,
}

impl FromStr for PrintFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_keyword(s).as_str() {
            "single" | "single-sided" | "singlesided" | "simplex" | "one-sided" => {
                Ok(Self::SingleSided)
            }
            "double" | "double-sided" | "doublesided" | "duplex" | "two-sided" => {
                Ok(Self::DoubleSided)
            }
            _ => Err(PrepError::InvalidSetting {
                field: "print_format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleSided => f.write_str("single-sided"),
            Self::DoubleSided => f.write_str("double-sided"),
        }
    }
}

/// Colour mode the whole job is billed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintColor {
    BlackAndWhite,
    Color,
}

impl FromStr for PrintColor {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_keyword(s).as_str() {
            "bw" | "b&w" | "b/w" | "black-and-white" | "blackandwhite" | "mono"
            | "monochrome" | "grayscale" | "greyscale" => Ok(Self::BlackAndWhite),
            "color" | "colour" => Ok(Self::Color),
            _ => Err(PrepError::InvalidSetting {
                field: "print_color",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlackAndWhite => f.write_str("black-and-white"),
            Self::Color => f.write_str("color"),
        }
    }
}

/// Binding service requested for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Binding {
    #[default]
    None,
    Soft,
    Spiral,
    Hard,
}

impl FromStr for Binding {
    type Err = PrepError;

    /// An empty string means no binding was chosen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_keyword(s).as_str() {
            "" | "none" => Ok(Self::None),
            "soft" => Ok(Self::Soft),
            "spiral" => Ok(Self::Spiral),
            "hard" => Ok(Self::Hard),
            _ => Err(PrepError::InvalidSetting {
                field: "binding",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Soft => f.write_str("soft"),
            Self::Spiral => f.write_str("spiral"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

/// Print options chosen by the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub paper_size: PaperSize,
    pub print_format: PrintFormat,
    pub print_color: PrintColor,
    #[serde(default)]
    pub binding: Binding,
    /// Requested copies. Zero is billed as one copy.
    pub copies: u32,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default)]
    pub after_dark: bool,
    /// Pages that must print in colour inside a black-and-white job.
    #[serde(default)]
    pub extra_color_pages: u32,
}

impl PrintSettings {
    /// Copies actually billed (never below one).
    pub fn effective_copies(&self) -> u32 {
        self.copies.max(1)
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            print_format: PrintFormat::SingleSided,
            print_color: PrintColor::BlackAndWhite,
            binding: Binding::None,
            copies: 1,
            emergency: false,
            after_dark: false,
            extra_color_pages: 0,
        }
    }
}

/// Per-page rates for one paper size, in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub single_bw: Money,
    pub single_color: Money,
    pub double_bw: Money,
    pub double_color: Money,
}

impl RateTable {
    /// Per-page rate for a format/colour combination.
    pub fn rate(&self, format: PrintFormat, color: PrintColor) -> Money {
        match (format, color) {
            (PrintFormat::SingleSided, PrintColor::BlackAndWhite) => self.single_bw,
            (PrintFormat::SingleSided, PrintColor::Color) => self.single_color,
            (PrintFormat::DoubleSided, PrintColor::BlackAndWhite) => self.double_bw,
            (PrintFormat::DoubleSided, PrintColor::Color) => self.double_color,
        }
    }

    fn entries(&self) -> [(&'static str, Money); 4] {
        [
            ("single_bw", self.single_bw),
            ("single_color", self.single_color),
            ("double_bw", self.double_bw),
            ("double_color", self.double_color),
        ]
    }
}

/// A shop's price list: per-page rates by paper size plus service fees, all
/// in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffTable {
    pub a4: RateTable,
    pub a3: RateTable,
    #[serde(default)]
    pub soft_binding_fee: Money,
    #[serde(default)]
    pub spiral_binding_fee: Money,
    #[serde(default)]
    pub hard_binding_fee: Money,
    #[serde(default)]
    pub emergency_fee: Money,
    /// Falls back to `emergency_fee` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_dark_fee: Option<Money>,
}

impl TariffTable {
    /// Parse and validate a tariff from the shop-data store's JSON.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let tariff: Self = serde_json::from_str(json)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Reject negative rates and fees.
    pub fn validate(&self) -> crate::error::Result<()> {
        let sized = [("a4", &self.a4), ("a3", &self.a3)];
        for (size, table) in sized {
            for (name, value) in table.entries() {
                check_amount(&format!("{size}.{name}"), value)?;
            }
        }

        check_amount("soft_binding_fee", self.soft_binding_fee)?;
        check_amount("spiral_binding_fee", self.spiral_binding_fee)?;
        check_amount("hard_binding_fee", self.hard_binding_fee)?;
        check_amount("emergency_fee", self.emergency_fee)?;
        if let Some(fee) = self.after_dark_fee {
            check_amount("after_dark_fee", fee)?;
        }
        Ok(())
    }

    /// Rate table for a paper size.
    pub fn rates(&self, paper_size: PaperSize) -> &RateTable {
        match paper_size {
            PaperSize::A4 => &self.a4,
            PaperSize::A3 => &self.a3,
        }
    }

    /// Flat fee for a binding option.
    pub fn binding_fee(&self, binding: Binding) -> Money {
        match binding {
            Binding::None => Money::zero(),
            Binding::Soft => self.soft_binding_fee,
            Binding::Spiral => self.spiral_binding_fee,
            Binding::Hard => self.hard_binding_fee,
        }
    }

    /// After-dark surcharge, falling back to the emergency fee.
    pub fn effective_after_dark_fee(&self) -> Money {
        self.after_dark_fee.unwrap_or(self.emergency_fee)
    }
}

fn check_amount(name: &str, value: Money) -> crate::error::Result<()> {
    if value.is_negative() {
        return Err(PrepError::InvalidTariff(format!(
            "{name} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

/// Itemised view of a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The primary per-page rate the job is billed at.
    pub per_page_rate: Money,
    pub binding_cost: Money,
    pub emergency_cost: Money,
    pub after_dark_cost: Money,
    /// Reserved for the platform's cut; always zero here.
    pub commission: Money,
}

/// Total price plus its breakdown, handed to checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub total: Money,
    pub breakdown: CostBreakdown,
}

impl PriceQuote {
    /// The quote returned when a shop has no tariff configured.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// An image footprint to be placed on a page, in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A rows x cols arrangement of equal cells on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridChoice {
    pub rows: usize,
    pub cols: usize,
}

impl GridChoice {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell width and height on a page with `gap` between and around cells.
    ///
    /// Either dimension may be zero or negative when the grid does not fit.
    pub fn cell_size(&self, page_w: f64, page_h: f64, gap: f64) -> (f64, f64) {
        let cols = self.cols as f64;
        let rows = self.rows as f64;
        let cell_w = (page_w - (cols + 1.0) * gap) / cols;
        let cell_h = (page_h - (rows + 1.0) * gap) / rows;
        (cell_w, cell_h)
    }
}
