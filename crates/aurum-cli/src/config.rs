//! Runtime configuration.
//!
//! The resolved `Config` is an explicit object handed to the
//! collaborators (quote source, history store, notifier) at
//! construction time; the computational core itself takes none.
//! Secrets fall back to environment variables so the file can stay
//! committable.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use aurum_core::sources::yahoo::{
    DEFAULT_DOMESTIC_SYMBOL, DEFAULT_FX_SYMBOL, DEFAULT_REFERENCE_SYMBOL,
};
use aurum_core::{TROY_OUNCE_GRAMS, DEFAULT_CAPACITY};

use crate::error::CliError;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl Config {
    /// Loads the config file if present; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).map_err(|err| CliError::Config {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(CliError::Io(err)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: String,
    #[serde(default = "default_domestic_symbol")]
    pub domestic_symbol: String,
    #[serde(default = "default_reference_symbol")]
    pub reference_symbol: String,
    #[serde(default = "default_fx_symbol")]
    pub fx_symbol: String,
    #[serde(default = "default_unit_factor")]
    pub unit_conversion_factor: f64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            domestic_symbol: default_domestic_symbol(),
            reference_symbol: default_reference_symbol(),
            fx_symbol: default_fx_symbol(),
            unit_conversion_factor: default_unit_factor(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    pub fn resolved_bot_token(&self) -> Option<String> {
        self.bot_token
            .clone()
            .or_else(|| env::var(TOKEN_ENV).ok())
            .filter(|value| !value.is_empty())
    }

    pub fn resolved_chat_id(&self) -> Option<String> {
        self.chat_id
            .clone()
            .or_else(|| env::var(CHAT_ID_ENV).ok())
            .filter(|value| !value.is_empty())
    }
}

fn default_source_kind() -> String {
    "yahoo".to_owned()
}

fn default_domestic_symbol() -> String {
    DEFAULT_DOMESTIC_SYMBOL.to_owned()
}

fn default_reference_symbol() -> String {
    DEFAULT_REFERENCE_SYMBOL.to_owned()
}

fn default_fx_symbol() -> String {
    DEFAULT_FX_SYMBOL.to_owned()
}

fn default_unit_factor() -> f64 {
    TROY_OUNCE_GRAMS
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_history_path() -> PathBuf {
    PathBuf::from("gold_premium_history.json")
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").expect("parseable");

        assert_eq!(config.source.kind, "yahoo");
        assert_eq!(config.source.domestic_symbol, "411060.KS");
        assert_eq!(config.source.unit_conversion_factor, TROY_OUNCE_GRAMS);
        assert_eq!(config.history.capacity, 100);
        assert_eq!(
            config.history.path,
            PathBuf::from("gold_premium_history.json")
        );
        assert!(config.telegram.bot_token.is_none());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config: Config = toml::from_str(
            r#"
            [source]
            kind = "fixture"
            timeout_ms = 3000

            [history]
            capacity = 30

            [telegram]
            bot_token = "token"
            chat_id = "chat"
            "#,
        )
        .expect("parseable");

        assert_eq!(config.source.kind, "fixture");
        assert_eq!(config.source.timeout(), Duration::from_millis(3000));
        assert_eq!(config.source.reference_symbol, "GC=F");
        assert_eq!(config.history.capacity, 30);
        assert_eq!(config.telegram.resolved_bot_token().as_deref(), Some("token"));
        assert_eq!(config.telegram.resolved_chat_id().as_deref(), Some("chat"));
    }
}
