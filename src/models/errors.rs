//! Domain error payloads sent with non-2xx responses.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Why the server rejected a request, keyed by field or category.
///
/// Accepted shapes:
/// - `{"title": "required"}`
/// - `{"title": ["required", "too short"]}`
/// - `{"title": [{"msg": "required"}]}`
/// - `[{"path": "title", "msg": "required"}]` (validator arrays; `param`
///   works in place of `path`, and entries without either land under
///   `"error"`)
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Errors(BTreeMap<String, Vec<String>>);

/// Key used for messages that carry no field name.
pub const GENERAL_KEY: &str = "error";

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single message under [`GENERAL_KEY`].
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(GENERAL_KEY, message);
        errors
    }

    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    /// Messages for one field.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Every `(key, message)` pair, keys in sorted order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, messages)| {
            messages
                .iter()
                .map(move |message| (key.as_str(), message.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Message {
    Text(String),
    Detailed { msg: String },
}

impl Message {
    fn into_text(self) -> String {
        match self {
            Message::Text(text) => text,
            Message::Detailed { msg } => msg,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Messages {
    One(Message),
    Many(Vec<Message>),
}

#[derive(Deserialize)]
struct ValidatorEntry {
    msg: String,
    #[serde(default, alias = "param")]
    path: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Shape {
    Keyed(BTreeMap<String, Messages>),
    Listed(Vec<ValidatorEntry>),
}

impl<'de> Deserialize<'de> for Errors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut errors = Errors::new();
        match Shape::deserialize(deserializer)? {
            Shape::Keyed(map) => {
                for (key, messages) in map {
                    let texts = match messages {
                        Messages::One(message) => vec![message.into_text()],
                        Messages::Many(list) => list.into_iter().map(Message::into_text).collect(),
                    };
                    errors.0.entry(key).or_default().extend(texts);
                }
            }
            Shape::Listed(entries) => {
                for entry in entries {
                    let key = entry.path.unwrap_or_else(|| GENERAL_KEY.to_string());
                    errors.push(key, entry.msg);
                }
            }
        }
        Ok(errors)
    }
}
