use std::sync::Arc;

use teloxide::{
    dispatching::Dispatcher,
    dptree,
    prelude::*,
    types::{MessageKind, MessageOrigin},
};
use tracing::{error, info};

use cif_core::{
    config::Config,
    dispatch,
    domain::ChatId,
    transport::Transport,
    update::{ForwardOrigin, InboundUpdate, SharedChat, SharedUsers},
};

use crate::TelegramTransport;

/// Run the bot on long polling until the process is stopped.
pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("chat id finder bot started: @{}", me.username());
    }

    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(bot.clone()));

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![transport])
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(msg: Message, transport: Arc<dyn Transport>) -> ResponseResult<()> {
    let update = decode_message(&msg);

    // Failures are scoped to this update; the polling loop keeps running.
    if let Err(e) = dispatch::handle_update(transport.as_ref(), &update).await {
        error!(chat_id = msg.chat.id.0, "failed to handle update: {e}");
    }

    Ok(())
}

/// Decode a raw Telegram message into the core's update model.
///
/// Field extraction only; which field wins is decided by the core classifier.
fn decode_message(msg: &Message) -> InboundUpdate {
    let mut update = InboundUpdate::bare(ChatId(msg.chat.id.0));

    update.command = msg.text().and_then(parse_command_token);

    if let MessageKind::UsersShared(shared) = &msg.kind {
        update.shared_users = Some(SharedUsers {
            request_id: shared.users_shared.request_id.0,
            user_ids: shared
                .users_shared
                .users
                .iter()
                .map(|u| u.user_id.0 as i64)
                .collect(),
        });
    }

    if let MessageKind::ChatShared(shared) = &msg.kind {
        update.shared_chat = Some(SharedChat {
            request_id: shared.chat_shared.request_id.0,
            chat_id: shared.chat_shared.chat_id.0,
        });
    }

    update.forward = msg.forward_origin().map(|origin| match origin {
        MessageOrigin::User { sender_user, .. } => ForwardOrigin::User {
            id: sender_user.id.0 as i64,
            first_name: (!sender_user.first_name.is_empty())
                .then(|| sender_user.first_name.clone()),
        },
        MessageOrigin::HiddenUser { .. } => ForwardOrigin::Hidden,
        MessageOrigin::Chat { sender_chat, .. } => ForwardOrigin::Chat {
            id: sender_chat.id.0,
            title: sender_chat.title().unwrap_or_default().to_string(),
        },
        MessageOrigin::Channel { chat, .. } => ForwardOrigin::Chat {
            id: chat.id.0,
            title: chat.title().unwrap_or_default().to_string(),
        },
    });

    update
}

/// Extract the command token from message text.
///
/// Telegram may send `/cmd@botname arg1 ...`; returns the name without the
/// slash, case preserved, or `None` for non-command text.
fn parse_command_token(text: &str) -> Option<String> {
    let first = text.trim().split_whitespace().next()?;
    let rest = first.strip_prefix('/')?;

    let cmd = rest.split('@').next().unwrap_or("");
    if cmd.is_empty() {
        None
    } else {
        Some(cmd.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_command() {
        assert_eq!(parse_command_token("/start"), Some("start".to_string()));
    }

    #[test]
    fn strips_bot_mention_and_args() {
        assert_eq!(
            parse_command_token("/start@ChatIdFinderBot now"),
            Some("start".to_string())
        );
    }

    #[test]
    fn command_case_is_preserved() {
        assert_eq!(parse_command_token("/START"), Some("START".to_string()));
        assert_eq!(parse_command_token("/Start"), Some("Start".to_string()));
    }

    #[test]
    fn non_commands_yield_none() {
        assert_eq!(parse_command_token("hello"), None);
        assert_eq!(parse_command_token("start"), None);
        assert_eq!(parse_command_token("/"), None);
        assert_eq!(parse_command_token(""), None);
        assert_eq!(parse_command_token("  "), None);
    }
}
