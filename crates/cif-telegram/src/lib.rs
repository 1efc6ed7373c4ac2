//! Telegram adapter (teloxide).
//!
//! Implements the `cif-core` transport port over the Telegram Bot API.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{EffectId, LinkPreviewOptions, ParseMode, ReplyMarkup},
};

use cif_core::{domain::ChatId, errors::Error, transport::Transport, Result};

pub mod keyboard;
pub mod router;

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Transport(format!("telegram error: {e}"))
    }

    /// The welcome message carries a mention; keep its preview off.
    fn disabled_link_preview() -> LinkPreviewOptions {
        LinkPreviewOptions {
            is_disabled: true,
            url: None,
            prefer_small_media: false,
            prefer_large_media: false,
            show_above_text: false,
        }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_html(
        &self,
        chat_id: ChatId,
        html: &str,
        effect_id: Option<&str>,
    ) -> Result<()> {
        let mut req = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_owned())
            .parse_mode(ParseMode::Html);
        if let Some(effect) = effect_id {
            req = req.message_effect_id(EffectId(effect.to_owned()));
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn send_html_with_menu(
        &self,
        chat_id: ChatId,
        html: &str,
        effect_id: Option<&str>,
    ) -> Result<()> {
        let mut req = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_owned())
            .parse_mode(ParseMode::Html)
            .link_preview_options(Self::disabled_link_preview())
            .reply_markup(ReplyMarkup::Keyboard(keyboard::share_menu()));
        if let Some(effect) = effect_id {
            req = req.message_effect_id(EffectId(effect.to_owned()));
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}
