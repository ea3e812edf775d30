use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Grams per troy ounce. Converts the foreign reference unit (USD per
/// troy ounce) into the domestic mass unit (KRW per gram). Fixed for
/// the gold pairing, not configurable.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Normalized inputs for one premium computation.
///
/// Pure data holder: prices in domestic currency per domestic unit and
/// foreign currency per foreign unit, the FX rate between the two
/// currencies, and the foreign-unit to domestic-unit factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Domestic currency per domestic unit (e.g. KRW per gram).
    pub domestic_price: f64,
    /// Foreign currency per foreign unit (e.g. USD per troy ounce).
    pub reference_price_foreign: f64,
    /// Domestic currency per foreign currency unit (e.g. KRW per USD).
    pub fx_rate: f64,
    /// Foreign unit expressed in domestic units (e.g. ounce in grams).
    pub unit_conversion_factor: f64,
}

impl Quote {
    /// Validates every field as finite and strictly positive.
    pub fn new(
        domestic_price: f64,
        reference_price_foreign: f64,
        fx_rate: f64,
        unit_conversion_factor: f64,
    ) -> Result<Self, ValidationError> {
        validate_positive("domestic_price", domestic_price)?;
        validate_positive("reference_price_foreign", reference_price_foreign)?;
        validate_positive("fx_rate", fx_rate)?;
        validate_positive("unit_conversion_factor", unit_conversion_factor)?;

        Ok(Self {
            domestic_price,
            reference_price_foreign,
            fx_rate,
            unit_conversion_factor,
        })
    }

    /// Quote for the gold pairing: domestic KRW-per-gram against a
    /// USD-per-ounce reference, using the fixed ounce-to-gram factor.
    pub fn gold(
        domestic_price: f64,
        reference_price_foreign: f64,
        fx_rate: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            domestic_price,
            reference_price_foreign,
            fx_rate,
            TROY_OUNCE_GRAMS,
        )
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field, value });
    }
    Ok(())
}
