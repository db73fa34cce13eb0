use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, Author};

/// A reader comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "commenter")]
    pub author: Author,
    /// Post the comment belongs to
    #[serde(default)]
    pub post: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
