//! Search narrow tokens.

use std::fmt;

/// Narrow operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrowOperator {
    /// Bare search term.
    None,
    /// Group private messages that include the given users.
    GroupPrivateMessageWith,
    /// Messages with attachments.
    HasAttachment,
    /// Messages with links.
    HasLink,
    /// Messages with images.
    HasImage,
    /// A specific message.
    Id,
    /// Messages matching configured alert words.
    IsAlerted,
    /// Messages mentioning the current user.
    IsMentioned,
    /// All private messages.
    IsPrivate,
    /// Messages starred by the current user.
    IsStarred,
    /// Unread messages.
    IsUnread,
    /// Messages near a specific message.
    Near,
    /// All public streams.
    PublicStreams,
    /// A specific stream.
    Stream,
    /// A specific topic.
    Topic,
}

/// A single formatted search filter, e.g. `stream:general`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrow {
    operator: NarrowOperator,
    operand: Option<String>,
    formatted: String,
}

impl Narrow {
    /// Creates a narrow that takes no operand.
    #[must_use]
    pub fn new(operator: NarrowOperator) -> Self {
        Self::with_operand(operator, None::<String>)
    }

    /// Creates a narrow with an operand. Flag operators ignore it.
    #[must_use]
    pub fn with_operand(operator: NarrowOperator, operand: Option<impl Into<String>>) -> Self {
        let operand: Option<String> = operand.map(Into::into);
        let value = operand.as_deref().unwrap_or_default();

        let formatted = match operator {
            NarrowOperator::GroupPrivateMessageWith => format!("group-pm-with:{value}"),
            NarrowOperator::HasAttachment => "has:attachment".to_string(),
            NarrowOperator::HasLink => "has:link".to_string(),
            NarrowOperator::HasImage => "has:image".to_string(),
            NarrowOperator::Id => format!("id:{value}"),
            NarrowOperator::IsAlerted => "is:alerted".to_string(),
            NarrowOperator::IsMentioned => "is:mentioned".to_string(),
            NarrowOperator::IsPrivate => "is:private".to_string(),
            NarrowOperator::IsStarred => "is:starred".to_string(),
            NarrowOperator::IsUnread => "is:unread".to_string(),
            NarrowOperator::Near => format!("near:{value}"),
            NarrowOperator::PublicStreams => "streams:public".to_string(),
            NarrowOperator::Stream => format!("stream:{value}"),
            NarrowOperator::Topic => format!("topic:{}", value.replace(' ', "+")),
            NarrowOperator::None => value.to_string(),
        };

        Self {
            operator,
            operand,
            formatted,
        }
    }

    /// Shorthand for a stream narrow.
    #[must_use]
    pub fn stream(name: impl Into<String>) -> Self {
        Self::with_operand(NarrowOperator::Stream, Some(name))
    }

    /// Shorthand for a topic narrow.
    #[must_use]
    pub fn topic(name: impl Into<String>) -> Self {
        Self::with_operand(NarrowOperator::Topic, Some(name))
    }

    /// Shorthand for a bare search term.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self::with_operand(NarrowOperator::None, Some(term))
    }

    #[must_use]
    pub const fn operator(&self) -> NarrowOperator {
        self.operator
    }

    #[must_use]
    pub fn operand(&self) -> Option<&str> {
        self.operand.as_deref()
    }

    /// Returns the wire-format token.
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for Narrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
