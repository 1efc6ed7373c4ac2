//! The share-menu reply keyboard.
//!
//! Seven buttons issuing `request_users` / `request_chat` prompts; the
//! request ids match the registry in `cif-core`.

use teloxide::types::{
    ButtonRequest, KeyboardButton, KeyboardButtonRequestChat, KeyboardButtonRequestUsers,
    KeyboardMarkup, RequestId,
};

fn request_users(request_id: i32) -> KeyboardButtonRequestUsers {
    KeyboardButtonRequestUsers::new(RequestId(request_id))
}

fn request_chat(request_id: i32, is_channel: bool) -> KeyboardButtonRequestChat {
    KeyboardButtonRequestChat::new(RequestId(request_id), is_channel)
}

/// Build the persistent share menu sent with the welcome message.
pub fn share_menu() -> KeyboardMarkup {
    let mut users = request_users(1);
    users.user_is_bot = Some(false);
    let user = KeyboardButton::new("👤 User").request(ButtonRequest::RequestUsers(users));

    let mut chat = request_chat(2, true);
    chat.chat_has_username = Some(false);
    let private_channel =
        KeyboardButton::new("🔒 Private Channel").request(ButtonRequest::RequestChat(chat));

    let mut chat = request_chat(3, true);
    chat.chat_has_username = Some(true);
    let public_channel =
        KeyboardButton::new("🌐 Public Channel").request(ButtonRequest::RequestChat(chat));

    let mut chat = request_chat(4, false);
    chat.chat_has_username = Some(false);
    let private_group =
        KeyboardButton::new("🔒 Private Group").request(ButtonRequest::RequestChat(chat));

    let mut chat = request_chat(5, false);
    chat.chat_has_username = Some(true);
    let public_group =
        KeyboardButton::new("🌐 Public Group").request(ButtonRequest::RequestChat(chat));

    let mut users = request_users(6);
    users.user_is_bot = Some(true);
    let bot = KeyboardButton::new("🤖 Bot").request(ButtonRequest::RequestUsers(users));

    let mut users = request_users(7);
    users.user_is_premium = Some(true);
    let premium = KeyboardButton::new("Premium 🌟").request(ButtonRequest::RequestUsers(users));

    let mut markup = KeyboardMarkup::new(vec![
        vec![user],
        vec![private_channel, public_channel],
        vec![private_group, public_group],
        vec![bot, premium],
    ]);
    markup.resize_keyboard = true;
    markup
}
