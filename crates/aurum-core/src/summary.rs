use serde::Serialize;

use crate::{Premium, Quote, SourceId, TradeDate, TrendDirection, TrendLevel, TrendResult};

/// Structured result of one completed run.
///
/// This is the contract handed to rendering and notification
/// collaborators; it is derived transiently per run and never
/// persisted. A run either produces a complete summary or none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub date: TradeDate,
    pub source: SourceId,
    pub domestic_price: f64,
    pub reference_price_foreign: f64,
    pub fx_rate: f64,
    pub fair_value_domestic: f64,
    pub premium_pct: f64,
    pub change_vs_previous: f64,
    pub window_average: f64,
    pub level: TrendLevel,
    pub trend_direction: TrendDirection,
}

impl RunSummary {
    pub fn new(
        date: TradeDate,
        source: SourceId,
        quote: &Quote,
        premium: &Premium,
        trend: &TrendResult,
    ) -> Self {
        Self {
            date,
            source,
            domestic_price: quote.domestic_price,
            reference_price_foreign: quote.reference_price_foreign,
            fx_rate: quote.fx_rate,
            fair_value_domestic: premium.fair_value_domestic,
            premium_pct: premium.premium_pct,
            change_vs_previous: trend.change_vs_previous,
            window_average: trend.window_average,
            level: trend.level,
            trend_direction: trend.trend_direction,
        }
    }
}
