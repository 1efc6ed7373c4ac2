use crate::domain::ChatId;

/// One decoded inbound update, produced once at the transport boundary.
///
/// The adapter extracts the fields verbatim and makes no routing decisions;
/// precedence between them is owned by [`crate::dispatch::classify`].
#[derive(Clone, Debug)]
pub struct InboundUpdate {
    pub chat_id: ChatId,
    /// Command token without the leading slash or `@botname` suffix.
    pub command: Option<String>,
    pub shared_users: Option<SharedUsers>,
    pub shared_chat: Option<SharedChat>,
    /// `Some` iff the platform reported a forward date on the message.
    pub forward: Option<ForwardOrigin>,
}

impl InboundUpdate {
    /// An update carrying nothing the bot reacts to.
    pub fn bare(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            command: None,
            shared_users: None,
            shared_chat: None,
            forward: None,
        }
    }
}

/// Result of a "share user(s)" keyboard prompt.
///
/// The id list may be empty; that is an error condition, not a valid empty
/// result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedUsers {
    pub request_id: i32,
    pub user_ids: Vec<i64>,
}

/// Result of a "share chat" keyboard prompt. Always exactly one chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedChat {
    pub request_id: i32,
    pub chat_id: i64,
}

/// Origin metadata of a forwarded message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardOrigin {
    User {
        id: i64,
        first_name: Option<String>,
    },
    Chat {
        id: i64,
        title: String,
    },
    /// The sender hid their identity (or the origin is otherwise private).
    Hidden,
}
