//! Telegram delivery for run summaries.

use std::time::Duration;

use crate::config::{TelegramConfig, CHAT_ID_ENV, TOKEN_ENV};
use crate::error::CliError;

const API_URL: &str = "https://api.telegram.org";

/// Sends rendered summaries to a Telegram chat.
///
/// Construction fails when credentials are missing rather than
/// degrading to a silent no-op; delivery failures surface to the
/// caller and map to their own exit code.
#[derive(Debug)]
pub struct TelegramNotifier {
    client: reqwest::blocking::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn from_config(config: &TelegramConfig) -> Result<Self, CliError> {
        let bot_token = config.resolved_bot_token().ok_or_else(|| {
            CliError::Notify(format!(
                "telegram bot token is not configured (set [telegram].bot_token or {TOKEN_ENV})"
            ))
        })?;
        let chat_id = config.resolved_chat_id().ok_or_else(|| {
            CliError::Notify(format!(
                "telegram chat id is not configured (set [telegram].chat_id or {CHAT_ID_ENV})"
            ))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| CliError::Notify(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            bot_token,
            chat_id,
        })
    }

    pub fn send(&self, text: &str) -> Result<(), CliError> {
        let url = format!("{API_URL}/bot{}/sendMessage", self.bot_token);
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .map_err(|err| CliError::Notify(format!("telegram request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Notify(format!(
                "telegram returned HTTP {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_fail_construction() {
        // Explicit empty strings keep the test independent of the
        // environment variables on the host.
        let config = TelegramConfig {
            bot_token: Some(String::new()),
            chat_id: Some(String::new()),
        };

        let err = TelegramNotifier::from_config(&config).expect_err("must fail");
        assert!(matches!(err, CliError::Notify(_)));
    }
}
