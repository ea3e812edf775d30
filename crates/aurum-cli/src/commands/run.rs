use aurum_core::{
    analyze, compute_premium, FixtureSource, ManualSource, PremiumRecord, QuoteSource, RunSummary,
    TradeDate, YahooConfig, YahooSource,
};
use tracing::{debug, info};

use crate::cli::{OutputFormat, RunArgs, SourceKind};
use crate::config::Config;
use crate::error::CliError;
use crate::notify::TelegramNotifier;
use crate::output::{self, SummaryEnvelope};

use super::history_store;

pub fn run(
    args: &RunArgs,
    config: &Config,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let today = TradeDate::today_utc();
    let source = build_source(args, config)?;
    info!(source = %source.id(), date = %today, "fetching quotes");

    // Quote acquisition and premium computation run before the store is
    // touched; any failure here leaves history unchanged.
    let quote = source.fetch()?;
    let premium = compute_premium(&quote)?;
    debug!(
        premium_pct = premium.premium_pct,
        fair_value = premium.fair_value_domestic,
        "premium computed"
    );

    let store = history_store(args.history.as_deref(), config);
    let mut history = store.load();
    history.upsert(PremiumRecord::new(today.format_iso(), premium.premium_pct));

    if args.no_persist {
        info!("dry run, skipping history write");
    } else {
        store.persist(&history)?;
        debug!(path = %store.path().display(), records = history.len(), "history persisted");
    }

    // analyze ignores today-dated records, so the freshly upserted
    // entry cannot shift its own baseline.
    let trend = analyze(history.records(), premium.premium_pct, today);
    let summary = RunSummary::new(today, source.id(), &quote, &premium, &trend);
    let envelope = SummaryEnvelope::new(summary);
    output::render_summary(&envelope, format, pretty)?;

    if args.notify {
        let notifier = TelegramNotifier::from_config(&config.telegram)?;
        notifier.send(&output::summary_text(&envelope.summary))?;
        info!("telegram notification sent");
    }

    Ok(())
}

fn build_source(args: &RunArgs, config: &Config) -> Result<Box<dyn QuoteSource>, CliError> {
    let kind = match args.source {
        Some(kind) => kind,
        None => parse_kind(&config.source.kind)?,
    };

    match kind {
        SourceKind::Yahoo => {
            let yahoo = YahooSource::new(YahooConfig {
                domestic_symbol: config.source.domestic_symbol.clone(),
                reference_symbol: config.source.reference_symbol.clone(),
                fx_symbol: config.source.fx_symbol.clone(),
                unit_conversion_factor: args
                    .unit_factor
                    .unwrap_or(config.source.unit_conversion_factor),
                timeout: config.source.timeout(),
            })?;
            Ok(Box::new(yahoo))
        }
        SourceKind::Fixture => Ok(Box::new(FixtureSource::default())),
        SourceKind::Manual => {
            let domestic = require_value(args.domestic, "--domestic")?;
            let reference = require_value(args.reference, "--reference")?;
            let fx = require_value(args.fx, "--fx")?;
            let factor = args
                .unit_factor
                .unwrap_or(config.source.unit_conversion_factor);
            Ok(Box::new(ManualSource::new(domestic, reference, fx, factor)))
        }
    }
}

fn parse_kind(value: &str) -> Result<SourceKind, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yahoo" => Ok(SourceKind::Yahoo),
        "fixture" => Ok(SourceKind::Fixture),
        "manual" => Ok(SourceKind::Manual),
        other => Err(CliError::Usage(format!(
            "unknown source kind '{other}', expected one of yahoo, fixture, manual"
        ))),
    }
}

fn require_value(value: Option<f64>, flag: &str) -> Result<f64, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("{flag} is required with --source manual")))
}
