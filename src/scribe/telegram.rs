//! Outbound chat surface: the trait the router talks to, and the Telegram
//! implementation using teloxide.

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::warn;

/// Outbound message surface. The router is constructed with one of these so
/// tests can substitute a recording fake for the live client.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send a text message. Returns the sent message id.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i64, String>;

    /// Send an image file from disk, with an optional caption.
    async fn send_file(
        &self,
        chat_id: i64,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<i64, String>;
}

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatApi for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i64, String> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|msg| msg.id.0 as i64)
            .map_err(|e| {
                let msg = format!("Failed to send: {e}");
                warn!("{}", msg);
                msg
            })
    }

    async fn send_file(
        &self,
        chat_id: i64,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<i64, String> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat_id), InputFile::file(path.to_path_buf()));

        if let Some(cap) = caption {
            request = request.caption(cap);
        }

        request.await.map(|msg| msg.id.0 as i64).map_err(|e| {
            let msg = format!("Failed to send file: {e}");
            warn!("{}", msg);
            msg
        })
    }
}
