use aurum_core::{PremiumRecord, RunSummary, TrendDirection};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Machine-readable wrapper around the run summary.
#[derive(Debug, Serialize)]
pub struct SummaryEnvelope {
    pub run_id: Uuid,
    pub summary: RunSummary,
}

impl SummaryEnvelope {
    pub fn new(summary: RunSummary) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            summary,
        }
    }
}

pub fn render_summary(
    envelope: &SummaryEnvelope,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Text => println!("{}", summary_text(&envelope.summary)),
    }

    Ok(())
}

/// Human-readable body, also used verbatim as the notification text.
pub fn summary_text(summary: &RunSummary) -> String {
    let direction = match summary.trend_direction {
        TrendDirection::Up => "📈 rising",
        TrendDirection::Down => "📉 falling",
        TrendDirection::Flat => "➖ flat",
    };

    format!(
        "📅 {} gold premium update\n\
         domestic price: {:.0} KRW\n\
         international reference: ${:.2}\n\
         fx rate: {:.2} KRW/$\n\
         fair value: {:.0} KRW\n\
         👉 premium: {:+.2}% ({:+.2}% vs previous)\n\
         7-day average: {:.2}% ({} {})",
        summary.date,
        summary.domestic_price,
        summary.reference_price_foreign,
        summary.fx_rate,
        summary.fair_value_domestic,
        summary.premium_pct,
        summary.change_vs_previous,
        summary.window_average,
        summary.level,
        direction,
    )
}

pub fn render_history(
    records: &[PremiumRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            println!("{payload}");
        }
        OutputFormat::Text => {
            for record in records {
                println!("{}  {:+.2}%", record.date, record.premium_pct);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use aurum_core::{analyze, compute_premium, Quote, SourceId, TradeDate};

    use super::*;

    #[test]
    fn summary_text_carries_the_key_figures() {
        let date = TradeDate::parse("2024-01-03").expect("date");
        let quote = Quote::gold(76_000.0, 2_400.0, 1_350.0).expect("quote");
        let premium = compute_premium(&quote).expect("premium");
        let trend = analyze(&[], premium.premium_pct, date);
        let summary = RunSummary::new(date, SourceId::Fixture, &quote, &premium, &trend);

        let text = summary_text(&summary);

        assert!(text.contains("2024-01-03"));
        assert!(text.contains("76000 KRW"));
        assert!(text.contains("-27.04%"));
        assert!(text.contains("(undervalued ➖ flat)"));
    }
}
