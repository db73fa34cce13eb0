use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::deserialize_id;

/// Name and handle shown next to posts and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub username: String,
}

/// Topic a post is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[serde(rename = "javascript/typescript")]
    JavascriptTypescript,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "css")]
    Css,
    /// Anything the server files elsewhere, including categories this client
    /// does not know yet
    #[default]
    #[serde(rename = "other", other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::JavascriptTypescript => "javascript/typescript",
            Category::Html => "html",
            Category::Css => "css",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post as served by the API.
///
/// Posts are snapshots. The client never edits one in place; a fresh copy
/// replaces it after a round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub author: Author,
    pub title: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_credit: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// CSS `object-fit` hint for the cover image
    #[serde(default)]
    pub object_fit: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "clientURL")]
    pub client_url: String,
}

impl Post {
    /// Date part of the timestamp, e.g. `2 March 2024`.
    pub fn display_date(&self) -> String {
        self.timestamp.format("%-d %B %Y").to_string()
    }
}

/// The first featured post in `posts`, if any.
pub fn find_featured(posts: &[Post]) -> Option<&Post> {
    posts.iter().find(|post| post.is_featured)
}
