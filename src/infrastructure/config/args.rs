use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::log_level::LogLevel;
use super::zuliprc;
use crate::domain::entities::{ClientConfig, EditMessage, Emoji, PropagateMode, Recipients};
use crate::domain::errors::ConfigError;

#[derive(Debug, Parser)]
#[command(
    name = "zulip",
    version,
    about = "Send, edit, delete and react to Zulip messages",
    long_about = None
)]
pub struct CliArgs {
    /// zuliprc file path. Searched for when omitted.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub zuliprc: Option<PathBuf>,

    /// Site base URL. Overrides the zuliprc file together with email and key.
    #[arg(long, env = "ZULIP_SITE", requires_all = ["email", "api_key"])]
    pub site: Option<String>,

    /// User email.
    #[arg(long, env = "ZULIP_EMAIL")]
    pub email: Option<String>,

    /// API key.
    #[arg(long, env = "ZULIP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Send requests through this curl executable instead of the built-in client.
    #[arg(long, value_name = "PATH")]
    pub curl: Option<PathBuf>,

    /// Log file path. Logs go to stderr when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a private message.
    SendPrivate {
        /// Message content.
        content: String,
        #[command(flatten)]
        to: RecipientArgs,
    },
    /// Send a message to a stream topic.
    SendStream {
        /// Message content.
        content: String,
        /// Topic name.
        #[arg(short, long)]
        topic: String,
        #[command(flatten)]
        to: RecipientArgs,
    },
    /// Edit or move a message.
    Edit {
        message_id: u64,
        /// New content.
        #[arg(long)]
        content: Option<String>,
        /// New topic.
        #[arg(long)]
        topic: Option<String>,
        /// Stream to move the message to.
        #[arg(long)]
        stream_id: Option<u64>,
        /// Which messages in the topic the change applies to.
        #[arg(long, value_enum, default_value_t = PropagateArg::One)]
        propagate: PropagateArg,
    },
    /// Delete a message.
    Delete { message_id: u64 },
    /// Add an emoji reaction.
    React {
        message_id: u64,
        #[command(flatten)]
        emoji: EmojiArgs,
    },
    /// Remove an emoji reaction.
    Unreact {
        message_id: u64,
        #[command(flatten)]
        emoji: EmojiArgs,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct RecipientArgs {
    /// Recipient emails or stream names.
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Recipient user or stream ids.
    #[arg(long, value_delimiter = ',')]
    pub to_id: Vec<u64>,
}

impl RecipientArgs {
    #[must_use]
    pub fn recipients(&self) -> Recipients {
        if self.to_id.is_empty() {
            Recipients::names(self.to.iter().cloned())
        } else {
            Recipients::ids(self.to_id.iter().copied())
        }
    }
}

#[derive(Debug, Args)]
pub struct EmojiArgs {
    /// Emoji name, e.g. `octopus`.
    #[arg(long)]
    pub name: Option<String>,

    /// Emoji code, e.g. `1f419`.
    #[arg(long)]
    pub code: Option<String>,
}

impl EmojiArgs {
    #[must_use]
    pub fn emoji(&self) -> Emoji {
        Emoji {
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PropagateArg {
    One,
    Later,
    All,
}

impl From<PropagateArg> for PropagateMode {
    fn from(value: PropagateArg) -> Self {
        match value {
            PropagateArg::One => Self::One,
            PropagateArg::Later => Self::Later,
            PropagateArg::All => Self::All,
        }
    }
}

impl Command {
    /// Builds the edit request for [`Command::Edit`].
    #[must_use]
    pub fn edit_request(
        content: Option<String>,
        topic: Option<String>,
        stream_id: Option<u64>,
        propagate: PropagateArg,
    ) -> EditMessage {
        EditMessage {
            content,
            topic,
            stream_id,
            propagate_mode: propagate.into(),
        }
    }
}

impl CliArgs {
    /// Resolves credentials: explicit site/email/key win, otherwise a zuliprc
    /// file is loaded (the given path, or one found from `search_from`).
    ///
    /// # Errors
    /// Returns error if the credentials are invalid or no zuliprc is found.
    pub fn client_config(&self, search_from: &std::path::Path) -> Result<ClientConfig, ConfigError> {
        if let (Some(site), Some(email), Some(api_key)) = (&self.site, &self.email, &self.api_key) {
            return ClientConfig::new(site, email.clone(), api_key.clone());
        }

        let path = match &self.zuliprc {
            Some(path) => path.clone(),
            None => zuliprc::find(search_from)?,
        };

        zuliprc::load(&path)
    }
}
