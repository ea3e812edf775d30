//! Yahoo Finance quote source.
//!
//! Fetches the domestic instrument, the foreign reference, and the FX
//! rate from the v8 chart endpoint and assembles a `Quote`. A missing
//! market price falls back to the previous close (off-hours behavior);
//! if neither is present the fetch fails — no stale-value substitution.

use std::time::Duration;

use serde::Deserialize;

use crate::source::{QuoteSource, SourceError, SourceId};
use crate::{Quote, TROY_OUNCE_GRAMS};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// ACE KRX gold spot ETF, KRW per share.
pub const DEFAULT_DOMESTIC_SYMBOL: &str = "411060.KS";
/// COMEX gold front-month future, USD per troy ounce.
pub const DEFAULT_REFERENCE_SYMBOL: &str = "GC=F";
/// USD/KRW exchange rate.
pub const DEFAULT_FX_SYMBOL: &str = "KRW=X";

/// Symbols and transport settings for the Yahoo source.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub domestic_symbol: String,
    pub reference_symbol: String,
    pub fx_symbol: String,
    pub unit_conversion_factor: f64,
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            domestic_symbol: DEFAULT_DOMESTIC_SYMBOL.to_owned(),
            reference_symbol: DEFAULT_REFERENCE_SYMBOL.to_owned(),
            fx_symbol: DEFAULT_FX_SYMBOL.to_owned(),
            unit_conversion_factor: TROY_OUNCE_GRAMS,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking Yahoo Finance adapter.
#[derive(Debug)]
pub struct YahooSource {
    config: YahooConfig,
    client: reqwest::blocking::Client,
}

impl YahooSource {
    pub fn new(config: YahooConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent("Mozilla/5.0 (compatible; aurum)")
            .build()
            .map_err(|err| SourceError::unavailable(format!("failed to build http client: {err}")))?;

        Ok(Self { config, client })
    }

    fn last_price(&self, symbol: &str) -> Result<f64, SourceError> {
        let url = format!("{CHART_URL}/{symbol}");
        let response = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .map_err(|err| {
                SourceError::unavailable(format!("request for '{symbol}' failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::unavailable(format!(
                "'{symbol}' returned HTTP {status}"
            )));
        }

        let payload: ChartResponse = response.json().map_err(|err| {
            SourceError::parse(format!("'{symbol}' returned malformed JSON: {err}"))
        })?;

        payload.last_price().ok_or_else(|| {
            SourceError::missing_data(format!(
                "no market price for '{symbol}'; market may be closed"
            ))
        })
    }
}

impl QuoteSource for YahooSource {
    fn id(&self) -> SourceId {
        SourceId::Yahoo
    }

    fn fetch(&self) -> Result<Quote, SourceError> {
        let domestic = self.last_price(&self.config.domestic_symbol)?;
        let reference = self.last_price(&self.config.reference_symbol)?;
        let fx = self.last_price(&self.config.fx_symbol)?;

        Quote::new(domestic, reference, fx, self.config.unit_conversion_factor)
            .map_err(SourceError::from)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    #[serde(rename = "chartPreviousClose")]
    chart_previous_close: Option<f64>,
}

impl ChartResponse {
    fn last_price(&self) -> Option<f64> {
        let meta = &self.chart.result.as_ref()?.first()?.meta;
        meta.regular_market_price.or(meta.chart_previous_close)
    }
}
