use crate::source::{QuoteSource, SourceError, SourceId};
use crate::Quote;

/// Quote source backed by operator-supplied values.
///
/// Validation still applies at fetch time, so a typo on the command
/// line fails the same way a bad upstream value would.
#[derive(Debug, Clone)]
pub struct ManualSource {
    domestic_price: f64,
    reference_price_foreign: f64,
    fx_rate: f64,
    unit_conversion_factor: f64,
}

impl ManualSource {
    pub fn new(
        domestic_price: f64,
        reference_price_foreign: f64,
        fx_rate: f64,
        unit_conversion_factor: f64,
    ) -> Self {
        Self {
            domestic_price,
            reference_price_foreign,
            fx_rate,
            unit_conversion_factor,
        }
    }
}

impl QuoteSource for ManualSource {
    fn id(&self) -> SourceId {
        SourceId::Manual
    }

    fn fetch(&self) -> Result<Quote, SourceError> {
        Quote::new(
            self.domestic_price,
            self.reference_price_foreign,
            self.fx_rate,
            self.unit_conversion_factor,
        )
        .map_err(SourceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceErrorKind;
    use crate::TROY_OUNCE_GRAMS;

    #[test]
    fn valid_values_pass_through() {
        let source = ManualSource::new(76_000.0, 2_400.0, 1_350.0, TROY_OUNCE_GRAMS);
        let quote = source.fetch().expect("valid quote");
        assert_eq!(quote.fx_rate, 1_350.0);
    }

    #[test]
    fn invalid_values_fail_as_invalid_quote() {
        let source = ManualSource::new(76_000.0, 2_400.0, 0.0, TROY_OUNCE_GRAMS);
        let err = source.fetch().expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidQuote);
    }
}
