//! Durable premium history for aurum.
//!
//! This crate contains:
//! - The persisted premium record and ordered history sequence
//! - Same-day upsert semantics (at most one record per calendar date)
//! - A flat-file JSON store with a bounded retention window

pub mod error;
pub mod history;
pub mod store;

pub use error::StoreError;
pub use history::{History, PremiumRecord};
pub use store::{HistoryStore, DEFAULT_CAPACITY};
