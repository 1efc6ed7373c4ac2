//! Update classification and delivery.
//!
//! One level of graceful degradation on sends: a failed with-effect attempt
//! is retried exactly once without the effect, then the failure propagates.

use tracing::{error, info};

use crate::domain::ChatId;
use crate::response::{self, Response};
use crate::transport::Transport;
use crate::update::{ForwardOrigin, InboundUpdate, SharedChat, SharedUsers};
use crate::Result;

/// Which handler an update routes to. First match wins; the order is a fixed
/// contract, not an implementation detail.
#[derive(Debug, PartialEq, Eq)]
pub enum Category<'a> {
    Start,
    UsersShared(&'a SharedUsers),
    ChatShared(&'a SharedChat),
    Forwarded(&'a ForwardOrigin),
}

/// Classify an update, or `None` if no handler fires.
pub fn classify(update: &InboundUpdate) -> Option<Category<'_>> {
    if update.command.as_deref() == Some("start") {
        return Some(Category::Start);
    }
    if let Some(users) = &update.shared_users {
        return Some(Category::UsersShared(users));
    }
    if let Some(chat) = &update.shared_chat {
        return Some(Category::ChatShared(chat));
    }
    if let Some(origin) = &update.forward {
        return Some(Category::Forwarded(origin));
    }
    None
}

/// Terminal outcome of one delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    SentWithEffect,
    SentNoEffect,
}

/// Classify, format and deliver a reply for one update.
///
/// Updates that match no category are silently ignored. Failures are scoped
/// to this update; the caller's polling loop keeps running either way.
pub async fn handle_update(transport: &dyn Transport, update: &InboundUpdate) -> Result<()> {
    let response = match classify(update) {
        Some(Category::Start) => {
            info!("processing /start command");
            response::welcome()
        }
        Some(Category::UsersShared(payload)) => {
            let resp = response::shared_users(payload);
            if resp.is_error {
                error!(request_id = payload.request_id, "no user ids in shared-user payload");
            }
            resp
        }
        Some(Category::ChatShared(payload)) => response::shared_chat(payload),
        Some(Category::Forwarded(origin)) => {
            info!("received forwarded message");
            response::forwarded(origin)
        }
        None => return Ok(()),
    };

    deliver(transport, update.chat_id, &response).await?;
    Ok(())
}

/// Send a response, degrading gracefully on failure.
///
/// Error-classified responses (and responses without an effect) go straight
/// to the plain send. Otherwise the first attempt carries the effect; if it
/// fails, retry once without it. A second failure propagates.
pub async fn deliver(
    transport: &dyn Transport,
    chat_id: ChatId,
    response: &Response,
) -> Result<Delivery> {
    let effect = if response.is_error {
        None
    } else {
        response.effect_id
    };

    if let Some(effect_id) = effect {
        match send(transport, chat_id, response, Some(effect_id)).await {
            Ok(()) => {
                info!(chat_id = chat_id.0, "sent reply with effect");
                return Ok(Delivery::SentWithEffect);
            }
            Err(e) => {
                error!(chat_id = chat_id.0, "failed to send reply with effect: {e}");
            }
        }
    }

    match send(transport, chat_id, response, None).await {
        Ok(()) => {
            info!(chat_id = chat_id.0, "sent reply");
            Ok(Delivery::SentNoEffect)
        }
        Err(e) => {
            error!(chat_id = chat_id.0, "failed to send reply: {e}");
            Err(e)
        }
    }
}

async fn send(
    transport: &dyn Transport,
    chat_id: ChatId,
    response: &Response,
    effect_id: Option<&str>,
) -> Result<()> {
    if response.show_share_menu {
        transport
            .send_html_with_menu(chat_id, &response.text, effect_id)
            .await
    } else {
        transport.send_html(chat_id, &response.text, effect_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Error;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct SentCall {
        chat_id: i64,
        html: String,
        effect_id: Option<String>,
        with_menu: bool,
    }

    /// Fake transport recording every call; fails the first `fail_first`
    /// sends.
    struct FakeTransport {
        calls: Mutex<Vec<SentCall>>,
        fail_first: Mutex<usize>,
    }

    impl FakeTransport {
        fn new(fail_first: usize) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_first: Mutex::new(fail_first),
            }
        }

        fn record(&self, chat_id: ChatId, html: &str, effect_id: Option<&str>, with_menu: bool) -> Result<()> {
            self.calls.lock().unwrap().push(SentCall {
                chat_id: chat_id.0,
                html: html.to_string(),
                effect_id: effect_id.map(str::to_string),
                with_menu,
            });

            let mut remaining = self.fail_first.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(Error::Transport("boom".to_string()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<SentCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for FakeTransport {
        async fn send_html(
            &self,
            chat_id: ChatId,
            html: &str,
            effect_id: Option<&str>,
        ) -> Result<()> {
            self.record(chat_id, html, effect_id, false)
        }

        async fn send_html_with_menu(
            &self,
            chat_id: ChatId,
            html: &str,
            effect_id: Option<&str>,
        ) -> Result<()> {
            self.record(chat_id, html, effect_id, true)
        }
    }

    fn users_update(request_id: i32, user_ids: Vec<i64>) -> InboundUpdate {
        InboundUpdate {
            shared_users: Some(SharedUsers {
                request_id,
                user_ids,
            }),
            ..InboundUpdate::bare(ChatId(10))
        }
    }

    #[test]
    fn precedence_is_command_users_chat_forward() {
        let mut update = InboundUpdate::bare(ChatId(1));
        update.command = Some("start".to_string());
        update.shared_users = Some(SharedUsers {
            request_id: 1,
            user_ids: vec![1],
        });
        update.shared_chat = Some(SharedChat {
            request_id: 2,
            chat_id: -1,
        });
        update.forward = Some(ForwardOrigin::Hidden);

        assert_eq!(classify(&update), Some(Category::Start));

        update.command = None;
        assert!(matches!(classify(&update), Some(Category::UsersShared(_))));

        update.shared_users = None;
        assert!(matches!(classify(&update), Some(Category::ChatShared(_))));

        update.shared_chat = None;
        assert!(matches!(classify(&update), Some(Category::Forwarded(_))));

        update.forward = None;
        assert_eq!(classify(&update), None);
    }

    #[test]
    fn other_commands_do_not_match() {
        let mut update = InboundUpdate::bare(ChatId(1));
        update.command = Some("help".to_string());
        assert_eq!(classify(&update), None);
    }

    #[test]
    fn command_matching_is_case_sensitive() {
        let mut update = InboundUpdate::bare(ChatId(1));
        for token in ["START", "Start", "sTaRt"] {
            update.command = Some(token.to_string());
            assert_eq!(classify(&update), None, "token {token}");
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let update = users_update(1, vec![111, 222]);
        let first = format!("{:?}", classify(&update));
        let second = format!("{:?}", classify(&update));
        assert_eq!(first, second);

        let a = response::shared_users(update.shared_users.as_ref().unwrap());
        let b = response::shared_users(update.shared_users.as_ref().unwrap());
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn delivery_succeeds_with_effect_on_first_attempt() {
        let transport = FakeTransport::new(0);
        let resp = response::shared_chat(&SharedChat {
            request_id: 3,
            chat_id: -100123,
        });

        let outcome = deliver(&transport, ChatId(5), &resp).await.unwrap();
        assert_eq!(outcome, Delivery::SentWithEffect);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].effect_id.is_some());
    }

    #[tokio::test]
    async fn delivery_falls_back_to_plain_send_once() {
        let transport = FakeTransport::new(1);
        let resp = response::shared_chat(&SharedChat {
            request_id: 3,
            chat_id: -100123,
        });

        let outcome = deliver(&transport, ChatId(5), &resp).await.unwrap();
        assert_eq!(outcome, Delivery::SentNoEffect);

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].effect_id.is_some());
        assert_eq!(calls[1].effect_id, None);
        assert_eq!(calls[0].html, calls[1].html);
    }

    #[tokio::test]
    async fn second_failure_propagates() {
        let transport = FakeTransport::new(2);
        let resp = response::shared_chat(&SharedChat {
            request_id: 3,
            chat_id: -100123,
        });

        let err = deliver(&transport, ChatId(5), &resp).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn error_responses_never_take_the_effect_path() {
        let transport = FakeTransport::new(0);
        let update = users_update(1, vec![]);

        handle_update(&transport, &update).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].effect_id, None);
        assert!(calls[0].html.contains("No User ID received"));
    }

    #[tokio::test]
    async fn start_reply_carries_menu_and_effect() {
        let transport = FakeTransport::new(0);
        let mut update = InboundUpdate::bare(ChatId(7));
        update.command = Some("start".to_string());

        handle_update(&transport, &update).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].with_menu);
        assert_eq!(
            calls[0].effect_id.as_deref(),
            Some(crate::registry::START_EFFECT_ID)
        );
    }

    #[tokio::test]
    async fn unclassified_updates_send_nothing() {
        let transport = FakeTransport::new(0);
        let update = InboundUpdate::bare(ChatId(9));

        handle_update(&transport, &update).await.unwrap();
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_request_kind_sends_plain_reply() {
        let transport = FakeTransport::new(0);
        let update = users_update(99, vec![555]);

        handle_update(&transport, &update).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].effect_id, None);
        assert!(calls[0].html.contains("Shared Unknown Info"));
    }
}
