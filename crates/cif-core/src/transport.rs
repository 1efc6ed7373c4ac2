use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Outbound messaging port.
///
/// Telegram is the only implementation today; the dispatcher and its tests
/// depend on this trait, not on the client library.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTML-formatted message, optionally with a message effect.
    async fn send_html(&self, chat_id: ChatId, html: &str, effect_id: Option<&str>)
        -> Result<()>;

    /// Same as [`Transport::send_html`], with the share-menu keyboard attached.
    async fn send_html_with_menu(
        &self,
        chat_id: ChatId,
        html: &str,
        effect_id: Option<&str>,
    ) -> Result<()>;
}
