//! Core domain for aurum.
//!
//! This crate contains:
//! - Canonical quote model and validation
//! - Premium computation against the fair-value reference
//! - Trailing-window trend classification
//! - Quote source trait and adapters
//! - The structured run summary handed to collaborators

pub mod domain;
pub mod error;
pub mod premium;
pub mod source;
pub mod sources;
pub mod summary;
pub mod trend;

pub use aurum_store::{History, HistoryStore, PremiumRecord, StoreError, DEFAULT_CAPACITY};
pub use domain::{Quote, TradeDate, TROY_OUNCE_GRAMS};
pub use error::{ComputeError, ValidationError};
pub use premium::{compute_premium, Premium};
pub use source::{QuoteSource, SourceError, SourceErrorKind, SourceId};
pub use sources::{FixtureSource, ManualSource, YahooConfig, YahooSource};
pub use summary::RunSummary;
pub use trend::{analyze, TrendDirection, TrendLevel, TrendResult, TREND_WINDOW};
