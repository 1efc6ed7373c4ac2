//! Pure response formatting (Telegram HTML).
//!
//! Labels and headers render in `<b>`, ids in `<code>`. User-supplied names
//! and titles are escaped before interpolation.

use crate::registry::{self, FORWARD_EFFECT_ID, START_EFFECT_ID};
use crate::update::{ForwardOrigin, SharedChat, SharedUsers};

/// One outbound reply, built fresh per update and consumed by a single
/// delivery attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub effect_id: Option<&'static str>,
    /// Attach the share-menu keyboard (welcome message only).
    pub show_share_menu: bool,
    /// Error-classified responses are logged at error level and never take
    /// the with-effect send path.
    pub is_error: bool,
}

impl Response {
    fn new(text: String, effect_id: Option<&'static str>) -> Self {
        Self {
            text,
            effect_id,
            show_share_menu: false,
            is_error: false,
        }
    }
}

const WELCOME_TEXT: &str = "👋 <b>Welcome to Chat ID Finder Bot!</b> 🆔\n\n\
✅ <b>Fetch Any Chat ID Instantly!</b>\n\n\
🔧 <b>How to Use?</b>\n\
1️⃣ Click the buttons below to share a chat or user.\n\
2️⃣ Receive the unique ID instantly.\n\n\
💎 <b>Features:</b>\n\
✅ Supports users, bots, groups & channels\n\
⚡ Fast and reliable\n\n\
<blockquote>🛠 Made with ❤️ by @TheSmartDev</blockquote>";

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Fixed welcome block for `/start`, with the share menu attached.
pub fn welcome() -> Response {
    Response {
        show_share_menu: true,
        ..Response::new(WELCOME_TEXT.to_string(), Some(START_EFFECT_ID))
    }
}

/// Reply for a shared-user payload: one id line per user, in payload order.
///
/// An empty id list yields an error-classified reply with no effect.
pub fn shared_users(payload: &SharedUsers) -> Response {
    let info = registry::lookup(payload.request_id);

    if payload.user_ids.is_empty() {
        let mut resp = Response::new(
            format!("⚠️ <b>Error:</b> No {} ID received.", info.label),
            None,
        );
        resp.is_error = true;
        return resp;
    }

    let mut text = format!("👤 <b>Shared {} Info</b>\n", info.label);
    for user_id in &payload.user_ids {
        text.push_str(&format!("🆔 ID: <code>{user_id}</code>\n"));
    }
    Response::new(text, info.effect_id)
}

/// Reply for a shared-chat payload: header plus the single chat id.
pub fn shared_chat(payload: &SharedChat) -> Response {
    let info = registry::lookup(payload.request_id);
    let text = format!(
        "💬 <b>Shared {} Info</b>\n🆔 ID: <code>{}</code>",
        info.label, payload.chat_id
    );
    Response::new(text, info.effect_id)
}

/// Reply for a forwarded message: user origin, chat origin, or the fixed
/// unsupported literal for hidden origins. All three are normal replies.
pub fn forwarded(origin: &ForwardOrigin) -> Response {
    let text = match origin {
        ForwardOrigin::User { id, first_name } => {
            let name = first_name.as_deref().unwrap_or("User");
            format!(
                "<b>Forward Message Detected</b>\n<b>Chat Name</b> {}\n<b>ChatID</b> <code>{id}</code>",
                escape_html(name)
            )
        }
        ForwardOrigin::Chat { id, title } => format!(
            "<b>Forward Message Detected</b>\n<b>Chat Name</b> {}\n<b>ChatID</b> <code>{id}</code>",
            escape_html(title)
        ),
        ForwardOrigin::Hidden => {
            "<b>Sorry Bro, Forward Method Not Support For Private Things</b>".to_string()
        }
    };
    Response::new(text, Some(FORWARD_EFFECT_ID))
}
