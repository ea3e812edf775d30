use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Quote, ValidationError};

/// Identifier for a quote source implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Yahoo,
    Fixture,
    Manual,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
            Self::Fixture => "fixture",
            Self::Manual => "manual",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yahoo" => Ok(Self::Yahoo),
            "fixture" => Ok(Self::Fixture),
            "manual" => Ok(Self::Manual),
            other => Err(ValidationError::InvalidSource {
                value: other.to_owned(),
            }),
        }
    }
}

/// Classification of quote-acquisition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or non-success HTTP status.
    Unavailable,
    /// The upstream answered but the required value is absent
    /// (e.g. market closed, delisted symbol).
    MissingData,
    /// The upstream answered with an unintelligible payload.
    Parse,
    /// The fetched values did not form a valid quote.
    InvalidQuote,
}

/// Structured quote-acquisition error.
///
/// Sources never mask a failure by substituting stale or default
/// values; callers decide whether to retry based on the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn missing_data(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::MissingData,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Parse,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceError {}

impl From<ValidationError> for SourceError {
    fn from(err: ValidationError) -> Self {
        Self {
            kind: SourceErrorKind::InvalidQuote,
            message: err.to_string(),
            retryable: false,
        }
    }
}

/// Yields a complete `Quote` or fails.
///
/// The only capability a quote-acquisition collaborator must provide.
/// Implementations must fail on any missing or non-positive value;
/// retry and backoff live outside this trait.
pub trait QuoteSource {
    fn id(&self) -> SourceId;
    fn fetch(&self) -> Result<Quote, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_ids_case_insensitively() {
        assert_eq!("Yahoo".parse::<SourceId>(), Ok(SourceId::Yahoo));
        assert_eq!(" manual ".parse::<SourceId>(), Ok(SourceId::Manual));
        assert!(matches!(
            "naver".parse::<SourceId>(),
            Err(ValidationError::InvalidSource { .. })
        ));
    }

    #[test]
    fn transport_failures_are_retryable_data_gaps_are_not() {
        assert!(SourceError::unavailable("timeout").retryable());
        assert!(!SourceError::missing_data("no price").retryable());
        assert!(!SourceError::parse("bad json").retryable());
    }

    #[test]
    fn invalid_quote_maps_from_validation_error() {
        let err = SourceError::from(ValidationError::NonPositiveValue {
            field: "fx_rate",
            value: 0.0,
        });
        assert_eq!(err.kind(), SourceErrorKind::InvalidQuote);
        assert!(!err.retryable());
    }
}
