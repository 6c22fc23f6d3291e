// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pricing engine — turns print settings, a page count, and a shop's tariff
// into a total and an itemised breakdown.
//
// Per-copy costs (pages, binding, colour pages in a mono job) scale with the
// number of copies; emergency and after-dark surcharges are charged once.
// All arithmetic is on integer minor units.

use printprep_core::{
    CostBreakdown, Money, PriceQuote, PrintColor, PrintSettings, RateTable, TariffTable,
};
use tracing::{debug, instrument};

/// Compute the quote for a job.
///
/// A missing tariff means the shop has no pricing configured and yields a
/// zero quote. Never fails.
#[instrument(skip(settings, tariff), fields(has_tariff = tariff.is_some()))]
pub fn compute_cost(
    settings: &PrintSettings,
    page_count: u32,
    tariff: Option<&TariffTable>,
) -> PriceQuote {
    let Some(tariff) = tariff else {
        debug!("No tariff configured, quoting zero");
        return PriceQuote::zero();
    };

    let rates = tariff.rates(settings.paper_size);
    let per_page_rate = rates.rate(settings.print_format, settings.print_color);
    let binding_cost = tariff.binding_fee(settings.binding);
    let surcharge = mixed_color_surcharge(settings, rates);
    let copies = settings.effective_copies();

    let base = (per_page_rate * page_count + binding_cost + surcharge) * copies;

    let emergency_cost = if settings.emergency {
        tariff.emergency_fee
    } else {
        Money::zero()
    };
    let after_dark_cost = if settings.after_dark {
        tariff.effective_after_dark_fee()
    } else {
        Money::zero()
    };

    let total = base + emergency_cost + after_dark_cost;

    debug!(
        paper = %settings.paper_size,
        format = %settings.print_format,
        color = %settings.print_color,
        %per_page_rate,
        %surcharge,
        copies,
        %base,
        %total,
        "Quote computed"
    );

    PriceQuote {
        total,
        breakdown: CostBreakdown {
            per_page_rate,
            binding_cost,
            emergency_cost,
            after_dark_cost,
            commission: Money::zero(),
        },
    }
}

/// Per-copy extra for colour pages inside a black-and-white job.
///
/// Zero for colour jobs, which are already billed at the colour rate.
pub fn mixed_color_surcharge(settings: &PrintSettings, rates: &RateTable) -> Money {
    match settings.print_color {
        PrintColor::Color => Money::zero(),
        PrintColor::BlackAndWhite => {
            let bw = rates.rate(settings.print_format, PrintColor::BlackAndWhite);
            let color = rates.rate(settings.print_format, PrintColor::Color);
            (color - bw).max(Money::zero()) * settings.extra_color_pages
        }
    }
}
