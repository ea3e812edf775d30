use std::fmt::{Display, Formatter};

use aurum_store::PremiumRecord;
use serde::{Deserialize, Serialize};

use crate::TradeDate;

/// Trailing window length used for the level classification.
pub const TREND_WINDOW: usize = 7;

/// Valuation of the current premium against the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLevel {
    Overvalued,
    Undervalued,
}

impl TrendLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overvalued => "overvalued",
            Self::Undervalued => "undervalued",
        }
    }
}

impl Display for TrendLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the premium relative to the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

impl Display for TrendDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient per-run classification; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendResult {
    pub level: TrendLevel,
    pub change_vs_previous: f64,
    pub window_average: f64,
    pub trend_direction: TrendDirection,
}

/// Classifies `current_premium` against the trailing history window.
///
/// Records dated `today` are ignored throughout, so a same-day re-run
/// (or the just-upserted record for the current run) never shifts its
/// own baseline. The comparison point is the last record whose date
/// differs from today; on a first-ever run both the baseline and the
/// window average default to the current premium, which yields a zero
/// change, a flat direction, and an undervalued level.
pub fn analyze(history: &[PremiumRecord], current_premium: f64, today: TradeDate) -> TrendResult {
    let today = today.format_iso();
    let prior: Vec<&PremiumRecord> = history
        .iter()
        .filter(|record| record.date != today)
        .collect();

    let window = &prior[prior.len().saturating_sub(TREND_WINDOW)..];
    let window_average = if window.is_empty() {
        current_premium
    } else {
        window.iter().map(|record| record.premium_pct).sum::<f64>() / window.len() as f64
    };

    // Equality deliberately classifies as undervalued.
    let level = if current_premium > window_average {
        TrendLevel::Overvalued
    } else {
        TrendLevel::Undervalued
    };

    let previous = prior
        .last()
        .map(|record| record.premium_pct)
        .unwrap_or(current_premium);
    let change_vs_previous = current_premium - previous;

    let trend_direction = if change_vs_previous > 0.0 {
        TrendDirection::Up
    } else if change_vs_previous < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    TrendResult {
        level,
        change_vs_previous,
        window_average,
        trend_direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> TradeDate {
        TradeDate::parse(value).expect("test date")
    }

    #[test]
    fn classifies_rising_overvalued_premium() {
        let history = vec![
            PremiumRecord::new("2024-01-01", 1.0),
            PremiumRecord::new("2024-01-02", 2.0),
        ];

        let result = analyze(&history, 3.0, date("2024-01-03"));

        assert_eq!(result.window_average, 1.5);
        assert_eq!(result.level, TrendLevel::Overvalued);
        assert_eq!(result.change_vs_previous, 1.0);
        assert_eq!(result.trend_direction, TrendDirection::Up);
    }

    #[test]
    fn first_run_has_no_baseline() {
        let history = vec![PremiumRecord::new("2024-01-03", 3.0)];

        let result = analyze(&history, 3.0, date("2024-01-03"));

        assert_eq!(result.change_vs_previous, 0.0);
        assert_eq!(result.trend_direction, TrendDirection::Flat);
        assert_eq!(result.window_average, 3.0);
        assert_eq!(result.level, TrendLevel::Undervalued);
    }

    #[test]
    fn todays_record_never_shifts_the_baseline() {
        let history = vec![
            PremiumRecord::new("2024-01-02", 2.0),
            PremiumRecord::new("2024-01-03", 5.0),
        ];

        let result = analyze(&history, 5.0, date("2024-01-03"));

        assert_eq!(result.change_vs_previous, 3.0);
        assert_eq!(result.window_average, 2.0);
    }

    #[test]
    fn equality_with_window_average_is_undervalued() {
        let history = vec![
            PremiumRecord::new("2024-01-01", 2.0),
            PremiumRecord::new("2024-01-02", 2.0),
        ];

        let result = analyze(&history, 2.0, date("2024-01-03"));

        assert_eq!(result.level, TrendLevel::Undervalued);
        assert_eq!(result.trend_direction, TrendDirection::Flat);
    }

    #[test]
    fn window_is_capped_at_seven_samples() {
        let mut history = Vec::new();
        for day in 1..=9 {
            history.push(PremiumRecord::new(format!("2024-01-0{day}"), day as f64));
        }

        let result = analyze(&history, 10.0, date("2024-01-10"));

        // Mean of days 3..=9, not all nine samples.
        assert_eq!(result.window_average, 6.0);
    }

    #[test]
    fn falling_premium_trends_down() {
        let history = vec![
            PremiumRecord::new("2024-01-01", 4.0),
            PremiumRecord::new("2024-01-02", 3.0),
        ];

        let result = analyze(&history, 1.0, date("2024-01-03"));

        assert_eq!(result.change_vs_previous, -2.0);
        assert_eq!(result.trend_direction, TrendDirection::Down);
        assert_eq!(result.level, TrendLevel::Undervalued);
    }
}
