use crate::source::{QuoteSource, SourceError, SourceId};
use crate::{Quote, TROY_OUNCE_GRAMS};

/// Deterministic quote source for tests and offline runs.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    domestic_price: f64,
    reference_price_foreign: f64,
    fx_rate: f64,
    unit_conversion_factor: f64,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self {
            domestic_price: 148_000.0,
            reference_price_foreign: 3_300.0,
            fx_rate: 1_390.0,
            unit_conversion_factor: TROY_OUNCE_GRAMS,
        }
    }
}

impl FixtureSource {
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

impl QuoteSource for FixtureSource {
    fn id(&self) -> SourceId {
        SourceId::Fixture
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

    #[test]
    fn default_fixture_yields_a_valid_quote() {
        let quote = FixtureSource::default().fetch().expect("valid quote");
        assert!(quote.domestic_price > 0.0);
        assert_eq!(quote.unit_conversion_factor, TROY_OUNCE_GRAMS);
    }

    #[test]
    fn fetch_is_deterministic() {
        let source = FixtureSource::default();
        assert_eq!(source.fetch().expect("quote"), source.fetch().expect("quote"));
    }
}
