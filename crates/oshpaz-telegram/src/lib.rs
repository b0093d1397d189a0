// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram notification channel for the Oshpaz storefront.
//!
//! Implements [`NotifyChannel`] on top of the Telegram Bot API via
//! teloxide. This is an outbound-only channel: the relays push order
//! announcements to the admin chat and customer chats, nothing is
//! received.

use async_trait::async_trait;
use oshpaz_config::model::TelegramConfig;
use oshpaz_core::{HealthStatus, MessageId, NotifyChannel, OshpazError, OutboundNotice};
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::debug;

/// Telegram channel implementing [`NotifyChannel`].
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    /// Creates a notifier from the Telegram section of the config.
    ///
    /// Requires `config.bot_token` to be set and non-empty.
    pub fn new(config: &TelegramConfig) -> Result<Self, OshpazError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            OshpazError::Config("telegram.bot_token is required for the notifier".into())
        })?;

        if token.is_empty() {
            return Err(OshpazError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
        })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl NotifyChannel for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn health_check(&self) -> Result<HealthStatus, OshpazError> {
        // getMe doubles as a token validity check.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }

    async fn send(&self, notice: OutboundNotice) -> Result<MessageId, OshpazError> {
        let chat_id = parse_chat_id(&notice.recipient)?;
        debug!(chat_id = chat_id.0, "sending Telegram notification");

        let sent = self
            .bot
            .send_message(Recipient::Id(chat_id), &notice.text)
            .await
            .map_err(|e| OshpazError::channel(format!("failed to send message: {e}"), e))?;

        Ok(MessageId(sent.id.0.to_string()))
    }
}

/// Parses a recipient string into a Telegram chat id.
fn parse_chat_id(recipient: &str) -> Result<ChatId, OshpazError> {
    recipient
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| OshpazError::Channel {
            message: format!("invalid Telegram chat id: {recipient:?}"),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_bot_token() {
        let config = TelegramConfig {
            bot_token: None,
            admin_chat_ids: vec![],
        };
        assert!(TelegramNotifier::new(&config).is_err());
    }

    #[test]
    fn new_rejects_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(String::new()),
            admin_chat_ids: vec![],
        };
        assert!(TelegramNotifier::new(&config).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let config = TelegramConfig {
            bot_token: Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".into()),
            admin_chat_ids: vec!["123456789".into()],
        };
        let notifier = TelegramNotifier::new(&config).unwrap();
        assert_eq!(notifier.name(), "telegram");
    }

    #[test]
    fn chat_id_parsing() {
        assert_eq!(parse_chat_id("123456789").unwrap().0, 123456789);
        assert_eq!(parse_chat_id("-100987654321").unwrap().0, -100987654321);
        assert!(parse_chat_id("not-a-number").is_err());
        assert!(parse_chat_id("").is_err());
    }
}
