//! Message operations.

use tracing::debug;

use crate::application::dto::{NormalizedResponse, OperationOutcome};
use crate::application::services::RequestDispatcher;
use crate::domain::entities::{EditMessage, Emoji, MessageId, Recipients};
use crate::domain::errors::ApiError;
use crate::domain::ports::{FormData, HttpMethod};

const MESSAGES_ENDPOINT: &str = "api/v1/messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageType {
    Private,
    Stream,
}

impl MessageType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Stream => "stream",
        }
    }
}

/// Send, edit, delete and react to messages.
///
/// Every operation comes in two forms: `try_*` never fails and reports an
/// [`OperationOutcome`], the plain form wraps it and returns an [`ApiError`]
/// carrying the same details.
#[derive(Clone)]
pub struct Messages {
    dispatcher: RequestDispatcher,
}

impl Messages {
    #[must_use]
    pub const fn new(dispatcher: RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Sends a private message and returns its id.
    ///
    /// # Errors
    /// Returns error if the message could not be sent.
    pub async fn send_private(
        &self,
        content: &str,
        recipients: impl Into<Recipients>,
    ) -> Result<MessageId, ApiError> {
        self.try_send_private(content, recipients)
            .await
            .into_result()
    }

    /// Sends a private message to users given by email or id.
    pub async fn try_send_private(
        &self,
        content: &str,
        recipients: impl Into<Recipients>,
    ) -> OperationOutcome<MessageId> {
        let response = self
            .send(content, None, MessageType::Private, &recipients.into())
            .await;

        sent_message_outcome("Messages.SendPrivate", &response)
    }

    /// Sends a stream message and returns its id.
    ///
    /// # Errors
    /// Returns error if the message could not be sent.
    pub async fn send_stream(
        &self,
        content: &str,
        topic: &str,
        streams: impl Into<Recipients>,
    ) -> Result<MessageId, ApiError> {
        self.try_send_stream(content, topic, streams)
            .await
            .into_result()
    }

    /// Sends a message to a stream topic; streams are given by name or id.
    pub async fn try_send_stream(
        &self,
        content: &str,
        topic: &str,
        streams: impl Into<Recipients>,
    ) -> OperationOutcome<MessageId> {
        let response = self
            .send(content, Some(topic), MessageType::Stream, &streams.into())
            .await;

        sent_message_outcome("Messages.SendStream", &response)
    }

    /// Edits or moves a message.
    ///
    /// # Errors
    /// Returns error if the edit is empty or was rejected.
    pub async fn edit(&self, message_id: MessageId, edit: EditMessage) -> Result<(), ApiError> {
        self.try_edit(message_id, edit).await.into_result()
    }

    /// Edits or moves a message. Fails without a network call when `edit`
    /// changes nothing.
    pub async fn try_edit(&self, message_id: MessageId, edit: EditMessage) -> OperationOutcome {
        if edit.is_empty() {
            return OperationOutcome::failed(
                "Messages.Edit: one of content, topic, and stream_id must be present!",
            );
        }

        let mut form = FormData::new();
        form.push_opt("content", edit.content);
        form.push_opt("topic", edit.topic);
        form.push_opt("stream_id", edit.stream_id.map(|id| id.to_string()));
        form.push("propagate_mode", edit.propagate_mode.as_str());

        let response = self
            .dispatcher
            .request(HttpMethod::Patch, &message_path(message_id), &form)
            .await;

        unit_outcome("Messages.Edit", &response)
    }

    /// Deletes a message.
    ///
    /// # Errors
    /// Returns error if the message could not be deleted.
    pub async fn delete(&self, message_id: MessageId) -> Result<(), ApiError> {
        self.try_delete(message_id).await.into_result()
    }

    /// Deletes a message.
    pub async fn try_delete(&self, message_id: MessageId) -> OperationOutcome {
        let response = self
            .dispatcher
            .request(HttpMethod::Delete, &message_path(message_id), &FormData::new())
            .await;

        unit_outcome("Messages.Delete", &response)
    }

    /// Adds an emoji reaction.
    ///
    /// # Errors
    /// Returns error if no emoji was given or the reaction was rejected.
    pub async fn add_reaction(&self, message_id: MessageId, emoji: Emoji) -> Result<(), ApiError> {
        self.try_add_reaction(message_id, emoji).await.into_result()
    }

    /// Adds an emoji reaction to a message.
    pub async fn try_add_reaction(&self, message_id: MessageId, emoji: Emoji) -> OperationOutcome {
        self.react(HttpMethod::Post, "Messages.AddEmoji", message_id, emoji)
            .await
    }

    /// Removes an emoji reaction.
    ///
    /// # Errors
    /// Returns error if no emoji was given or the removal was rejected.
    pub async fn remove_reaction(
        &self,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), ApiError> {
        self.try_remove_reaction(message_id, emoji)
            .await
            .into_result()
    }

    /// Removes an emoji reaction from a message.
    pub async fn try_remove_reaction(
        &self,
        message_id: MessageId,
        emoji: Emoji,
    ) -> OperationOutcome {
        self.react(HttpMethod::Delete, "Messages.RemoveEmoji", message_id, emoji)
            .await
    }

    async fn react(
        &self,
        method: HttpMethod,
        operation: &str,
        message_id: MessageId,
        emoji: Emoji,
    ) -> OperationOutcome {
        if emoji.is_empty() {
            return OperationOutcome::failed(format!(
                "{operation}: one of emoji_name or emoji_code must be present!"
            ));
        }

        let mut form = FormData::new();
        form.push_opt("emoji_name", emoji.name);
        form.push_opt("emoji_code", emoji.code);

        let path = format!("{}/reactions", message_path(message_id));
        let response = self.dispatcher.request(method, &path, &form).await;

        unit_outcome(operation, &response)
    }

    async fn send(
        &self,
        content: &str,
        topic: Option<&str>,
        kind: MessageType,
        recipients: &Recipients,
    ) -> NormalizedResponse {
        let mut form = FormData::new();
        form.push("type", kind.as_str());
        if kind == MessageType::Stream {
            form.push("topic", topic.unwrap_or_default());
        }
        form.push("to", recipients.to_field());
        form.push("content", content);

        debug!(kind = kind.as_str(), to = %recipients.to_field(), "Sending message");

        self.dispatcher
            .request(HttpMethod::Post, MESSAGES_ENDPOINT, &form)
            .await
    }
}

fn message_path(message_id: MessageId) -> String {
    format!("{MESSAGES_ENDPOINT}/{message_id}")
}

fn sent_message_outcome(operation: &str, response: &NormalizedResponse) -> OperationOutcome<MessageId> {
    if !response.is_api_success() {
        return OperationOutcome::failed(format!(
            "{operation} failed: {}",
            response.failure_message()
        ));
    }

    match response.id {
        Some(id) => {
            debug!(message_id = id, "{operation} succeeded");
            OperationOutcome::succeeded(id)
        }
        None => OperationOutcome::failed(format!(
            "{operation} failed: response did not include a message id"
        )),
    }
}

fn unit_outcome(operation: &str, response: &NormalizedResponse) -> OperationOutcome {
    if response.is_api_success() {
        debug!("{operation} succeeded");
        OperationOutcome::succeeded(())
    } else {
        OperationOutcome::failed(format!(
            "{operation} failed: {}",
            response.failure_message()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PropagateMode;
    use crate::domain::ports::RawTransportResult;
    use crate::domain::ports::mocks::MockTransport;
    use std::sync::Arc;

    const SUCCESS_WITH_ID: &str = r#"{"result":"success","msg":"","id":1}"#;
    const SUCCESS: &str = r#"{"result":"success","msg":""}"#;

    fn messages_with(transport: &Arc<MockTransport>) -> Messages {
        Messages::new(RequestDispatcher::new(transport.clone()))
    }

    #[tokio::test]
    async fn test_send_private_single_email() {
        let transport = Arc::new(MockTransport::ok(SUCCESS_WITH_ID));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_send_private("message", "user1@example.org")
            .await;

        assert!(outcome.is_success(), "{:?}", outcome.details());
        assert_eq!(outcome.value(), Some(&1));
        assert_eq!(outcome.details(), None);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].path, "api/v1/messages");
        assert_eq!(calls[0].form.get("type"), Some("private"));
        assert_eq!(calls[0].form.get("to"), Some("user1@example.org"));
        assert_eq!(calls[0].form.get("content"), Some("message"));
        assert_eq!(calls[0].form.get("topic"), None);
    }

    #[tokio::test]
    async fn test_send_private_multiple_emails() {
        let transport = Arc::new(MockTransport::ok(SUCCESS_WITH_ID));
        let messages = messages_with(&transport);

        let id = messages
            .send_private(
                "message",
                Recipients::names(["user1@example.org", "user2@example.org"]),
            )
            .await
            .unwrap();

        assert_eq!(id, 1);
        assert_eq!(
            transport.calls()[0].form.get("to"),
            Some("user1@example.org, user2@example.org")
        );
    }

    #[tokio::test]
    async fn test_send_private_by_ids() {
        let transport = Arc::new(MockTransport::ok(SUCCESS_WITH_ID));
        let messages = messages_with(&transport);

        let outcome = messages.try_send_private("message", Recipients::ids([1, 2])).await;

        assert!(outcome.is_success());
        assert_eq!(transport.calls()[0].form.get("to"), Some("[1, 2]"));
    }

    #[tokio::test]
    async fn test_send_private_api_error() {
        let transport = Arc::new(MockTransport::ok(
            r#"{"result":"error","msg":"Invalid email 'invalid@example.org'","code":"BAD_REQUEST"}"#,
        ));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_send_private("message", "invalid@example.org")
            .await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.value(), None);
        let details = outcome.details().unwrap();
        assert!(details.starts_with("Messages.SendPrivate failed:"));
        assert!(details.contains("Invalid email 'invalid@example.org'"));
        assert!(details.contains("BAD_REQUEST"));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_send_private_error_is_raised_by_plain_variant() {
        let transport = Arc::new(MockTransport::new(RawTransportResult::failed(
            "connection refused",
        )));
        let messages = messages_with(&transport);

        let err = messages
            .send_private("message", "user1@example.org")
            .await
            .unwrap_err();

        assert_eq!(err.details(), "Messages.SendPrivate failed: connection refused");
    }

    #[tokio::test]
    async fn test_send_success_without_id_fails() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        let outcome = messages.try_send_private("message", 5_u64).await;

        assert!(!outcome.is_success());
        assert!(outcome.details().unwrap().contains("message id"));
    }

    #[tokio::test]
    async fn test_send_stream_attaches_topic() {
        let transport = Arc::new(MockTransport::ok(SUCCESS_WITH_ID));
        let messages = messages_with(&transport);

        let id = messages
            .send_stream("content", "Topic for testing", "general")
            .await
            .unwrap();

        assert_eq!(id, 1);
        let form = &transport.calls()[0].form;
        let keys: Vec<_> = form.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["type", "topic", "to", "content"]);
        assert_eq!(form.get("type"), Some("stream"));
        assert_eq!(form.get("topic"), Some("Topic for testing"));
        assert_eq!(form.get("to"), Some("general"));
    }

    #[tokio::test]
    async fn test_send_stream_non_json_reply() {
        let transport = Arc::new(MockTransport::ok("<html>Bad Gateway</html>"));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_send_stream("content", "topic", Recipients::ids([10]))
            .await;

        assert!(!outcome.is_success());
        assert!(
            outcome
                .details()
                .unwrap()
                .starts_with("Messages.SendStream failed: failed to parse response")
        );
    }

    #[tokio::test]
    async fn test_edit_without_changes_skips_transport() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_edit(42, EditMessage::new().with_propagate_mode(PropagateMode::All))
            .await;

        assert!(!outcome.is_success());
        let details = outcome.details().unwrap();
        assert!(details.contains("content"));
        assert!(details.contains("topic"));
        assert!(details.contains("stream_id"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_builds_payload() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        messages
            .edit(
                42,
                EditMessage::new()
                    .with_topic("new topic")
                    .move_to_stream(7)
                    .with_propagate_mode(PropagateMode::Later),
            )
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Patch);
        assert_eq!(calls[0].path, "api/v1/messages/42");
        assert_eq!(calls[0].form.get("content"), None);
        assert_eq!(calls[0].form.get("topic"), Some("new topic"));
        assert_eq!(calls[0].form.get("stream_id"), Some("7"));
        assert_eq!(calls[0].form.get("propagate_mode"), Some("change_later"));
    }

    #[tokio::test]
    async fn test_edit_defaults_to_change_one() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_edit(1, EditMessage::new().with_content("edited"))
            .await;

        assert!(outcome.is_success());
        assert_eq!(
            transport.calls()[0].form.get("propagate_mode"),
            Some("change_one")
        );
    }

    #[tokio::test]
    async fn test_delete_failure_is_tagged() {
        let transport = Arc::new(MockTransport::new(RawTransportResult::response(
            404,
            r#"{"result":"error","msg":"Invalid message(s)","code":"BAD_REQUEST"}"#,
        )));
        let messages = messages_with(&transport);

        let outcome = messages.try_delete(99).await;

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Delete);
        assert_eq!(calls[0].path, "api/v1/messages/99");
        assert!(calls[0].form.is_empty());
        assert_eq!(
            outcome.details(),
            Some("Messages.Delete failed: result: error, code: BAD_REQUEST, message: Invalid message(s)")
        );
    }

    #[tokio::test]
    async fn test_delete_success() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        assert!(messages.delete(99).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_status_only_failure() {
        let transport = Arc::new(MockTransport::new(RawTransportResult::response(500, "{}")));
        let messages = messages_with(&transport);

        let outcome = messages.try_delete(3).await;

        assert_eq!(
            outcome.details(),
            Some("Messages.Delete failed: HTTP request failed: 500")
        );
    }

    #[tokio::test]
    async fn test_add_reaction() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        messages
            .add_reaction(5, Emoji::named("octopus"))
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].path, "api/v1/messages/5/reactions");
        assert_eq!(calls[0].form.get("emoji_name"), Some("octopus"));
        assert_eq!(calls[0].form.get("emoji_code"), None);
    }

    #[tokio::test]
    async fn test_remove_reaction() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        let outcome = messages
            .try_remove_reaction(5, Emoji::named("octopus").with_code("1f419"))
            .await;

        assert!(outcome.is_success());
        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Delete);
        assert_eq!(calls[0].path, "api/v1/messages/5/reactions");
        assert_eq!(calls[0].form.get("emoji_code"), Some("1f419"));
    }

    #[tokio::test]
    async fn test_reaction_without_emoji_skips_transport() {
        let transport = Arc::new(MockTransport::ok(SUCCESS));
        let messages = messages_with(&transport);

        let added = messages.try_add_reaction(5, Emoji::default()).await;
        let removed = messages.try_remove_reaction(5, Emoji::default()).await;

        assert!(added.details().unwrap().starts_with("Messages.AddEmoji:"));
        assert!(removed.details().unwrap().starts_with("Messages.RemoveEmoji:"));
        assert!(added.details().unwrap().contains("emoji_name"));
        assert_eq!(transport.call_count(), 0);
    }
}
