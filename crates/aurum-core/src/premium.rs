use serde::Serialize;

use crate::{ComputeError, Quote};

/// Result of one premium computation, full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Premium {
    /// Percentage deviation of the domestic price from fair value.
    pub premium_pct: f64,
    /// Theoretical domestic-currency price per domestic unit.
    pub fair_value_domestic: f64,
}

/// Derives the fair-value reference and the premium percentage.
///
/// `fair_value = reference_price_foreign * fx_rate / unit_conversion_factor`,
/// `premium = (domestic_price / fair_value - 1) * 100`.
///
/// Pure: identical quotes always yield identical results. The premium
/// may be negative, zero, or positive; no clamping is applied. A zero
/// or non-finite fair value fails instead of dividing.
pub fn compute_premium(quote: &Quote) -> Result<Premium, ComputeError> {
    let fair_value_domestic =
        quote.reference_price_foreign * quote.fx_rate / quote.unit_conversion_factor;

    if fair_value_domestic == 0.0 || !fair_value_domestic.is_finite() {
        return Err(ComputeError::DegenerateFairValue {
            fair_value: fair_value_domestic,
        });
    }

    let premium_pct = (quote.domestic_price / fair_value_domestic - 1.0) * 100.0;

    Ok(Premium {
        premium_pct,
        fair_value_domestic,
    })
}
