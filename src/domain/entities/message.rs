//! Message operation parameters.

use std::fmt;

/// Identifier of a Zulip message.
pub type MessageId = u64;

/// Message recipients, either by name (emails or stream names) or by numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// User emails or stream names.
    ByName(Vec<String>),
    /// User or stream ids.
    ById(Vec<u64>),
}

impl Recipients {
    /// Creates name-based recipients.
    #[must_use]
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ByName(names.into_iter().map(Into::into).collect())
    }

    /// Creates id-based recipients.
    #[must_use]
    pub fn ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self::ById(ids.into_iter().collect())
    }

    /// Renders the `to` form field.
    #[must_use]
    pub fn to_field(&self) -> String {
        match self {
            Self::ByName(names) => names.join(", "),
            Self::ById(ids) => {
                let joined = ids
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{joined}]")
            }
        }
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::ByName(vec![value.to_string()])
    }
}

impl From<u64> for Recipients {
    fn from(value: u64) -> Self {
        Self::ById(vec![value])
    }
}

/// How far an edit reaches within a topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropagateMode {
    /// Change only this message.
    #[default]
    One,
    /// Change this message and all later ones in the topic.
    Later,
    /// Change all messages in the topic.
    All,
}

impl PropagateMode {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "change_one",
            Self::Later => "change_later",
            Self::All => "change_all",
        }
    }
}

impl fmt::Display for PropagateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Changes to apply to an existing message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditMessage {
    pub content: Option<String>,
    pub topic: Option<String>,
    pub stream_id: Option<u64>,
    pub propagate_mode: PropagateMode,
}

impl EditMessage {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub const fn move_to_stream(mut self, stream_id: u64) -> Self {
        self.stream_id = Some(stream_id);
        self
    }

    #[must_use]
    pub const fn with_propagate_mode(mut self, mode: PropagateMode) -> Self {
        self.propagate_mode = mode;
        self
    }

    /// Returns true when nothing would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none() && self.topic.is_none() && self.stream_id.is_none()
    }
}

/// Emoji selector for reactions. At least one of name or code must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emoji {
    pub name: Option<String>,
    pub code: Option<String>,
}

impl Emoji {
    /// Selects an emoji by name, e.g. `octopus`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            code: None,
        }
    }

    /// Selects an emoji by code, e.g. `1f419`.
    #[must_use]
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            name: None,
            code: Some(code.into()),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_names_are_comma_joined() {
        let recipients = Recipients::names(["user1@example.org", "user2@example.org"]);
        assert_eq!(recipients.to_field(), "user1@example.org, user2@example.org");
    }

    #[test]
    fn test_ids_are_bracketed() {
        assert_eq!(Recipients::ids([1, 2, 3]).to_field(), "[1, 2, 3]");
        assert_eq!(Recipients::from(7).to_field(), "[7]");
        assert_eq!(Recipients::ids([]).to_field(), "[]");
    }

    #[test_case(PropagateMode::One, "change_one")]
    #[test_case(PropagateMode::Later, "change_later")]
    #[test_case(PropagateMode::All, "change_all")]
    fn test_propagate_mode_tokens(mode: PropagateMode, expected: &str) {
        assert_eq!(mode.as_str(), expected);
    }

    #[test]
    fn test_edit_emptiness() {
        assert!(EditMessage::new().is_empty());
        assert!(
            EditMessage::new()
                .with_propagate_mode(PropagateMode::All)
                .is_empty()
        );
        assert!(!EditMessage::new().move_to_stream(3).is_empty());
    }

    #[test]
    fn test_emoji_emptiness() {
        assert!(Emoji::default().is_empty());
        assert!(!Emoji::named("octopus").is_empty());
        assert!(!Emoji::code("1f419").is_empty());
    }
}
