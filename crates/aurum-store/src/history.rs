use serde::{Deserialize, Serialize};

/// One persisted premium sample at daily granularity.
///
/// The date is an ISO `YYYY-MM-DD` string; the premium is stored at
/// two-decimal precision. Upstream computation stays full precision,
/// rounding happens only here at record construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumRecord {
    pub date: String,
    pub premium_pct: f64,
}

impl PremiumRecord {
    pub fn new(date: impl Into<String>, premium_pct: f64) -> Self {
        Self {
            date: date.into(),
            premium_pct: round2(premium_pct),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ordered premium series, date ascending, at most one record per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<PremiumRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PremiumRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PremiumRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a record, replacing the most recent one in place when it
    /// carries the same date. Multiple runs within one calendar day must
    /// not inflate the series.
    pub fn upsert(&mut self, record: PremiumRecord) {
        match self.records.last_mut() {
            Some(last) if last.date == record.date => *last = record,
            _ => self.records.push(record),
        }
    }

    /// Most recent `n` records, oldest first.
    pub fn tail(&self, n: usize) -> &[PremiumRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Evicts the oldest records until at most `capacity` remain.
    pub(crate) fn truncate_front(&mut self, capacity: usize) {
        if self.records.len() > capacity {
            let overflow = self.records.len() - capacity;
            self.records.drain(..overflow);
        }
    }
}
