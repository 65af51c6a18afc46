use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_TIMESTAMP_FORMAT;

/// One of the two fixed identities taking part in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Participant {
    /// The person typing at the keyboard.
    Primary,
    /// The simulated counterpart answering with canned replies.
    Secondary,
}

impl Participant {
    pub fn as_str(self) -> &'static str {
        match self {
            Participant::Primary => "primary",
            Participant::Secondary => "secondary",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Participant::Primary
    }

    pub fn is_secondary(self) -> bool {
        self == Participant::Secondary
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Participant {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "primary" => Ok(Participant::Primary),
            "secondary" => Ok(Participant::Secondary),
            _ => Err(format!("invalid participant: {value}")),
        }
    }
}

impl TryFrom<String> for Participant {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Participant> for String {
    fn from(value: Participant) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub user: Participant,
    pub timestamp: String,
}

impl Message {
    pub fn new(user: Participant, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user,
            timestamp: timestamp.into(),
        }
    }

    /// Build a message stamped with the local wall clock.
    ///
    /// `format` is a `chrono` strftime string. An empty or malformed format
    /// falls back to the default `%H:%M:%S`.
    pub fn stamped(user: Participant, text: impl Into<String>, format: &str) -> Self {
        let format = if is_usable_format(format) {
            format
        } else {
            DEFAULT_TIMESTAMP_FORMAT
        };
        let items = StrftimeItems::new(format);
        let timestamp = chrono::Local::now().format_with_items(items).to_string();
        Self::new(user, text, timestamp)
    }
}

fn is_usable_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| item == Item::Error)
}
