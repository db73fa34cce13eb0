use serde::{Deserialize, Deserializer, Serialize};

use super::deserialize_id;

/// The signed-in reader.
///
/// Mutating calls (bookmarking, signing in) answer with the whole user, and
/// the client swaps it in wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    /// Ids of bookmarked posts
    #[serde(default, deserialize_with = "deserialize_bookmarks")]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub is_author: bool,
}

impl User {
    pub fn has_bookmarked(&self, post_id: &str) -> bool {
        self.bookmarks.iter().any(|id| id == post_id)
    }
}

/// Bookmarks arrive either as bare ids or as populated post objects.
fn deserialize_bookmarks<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Populated {
        #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
        id: String,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bookmark {
        Id(String),
        Post(Populated),
    }

    let entries = Option::<Vec<Bookmark>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Bookmark::Id(id) => id,
            Bookmark::Post(post) => post.id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_with_id_bookmarks() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "mao",
            "name": "Mao",
            "bookmarks": ["p1", "p2"]
        }))
        .unwrap();

        assert_eq!(user.id, "u1");
        assert!(user.has_bookmarked("p1"));
        assert!(!user.has_bookmarked("p3"));
        assert!(!user.is_author);
    }

    #[test]
    fn test_user_with_populated_bookmarks() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "mao",
            "bookmarks": [{ "_id": "p9", "title": "Ignored" }],
            "isAuthor": true
        }))
        .unwrap();

        assert_eq!(user.bookmarks, vec!["p9".to_string()]);
        assert!(user.is_author);
    }

    #[test]
    fn test_user_null_bookmarks() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "username": "mao",
            "bookmarks": null
        }))
        .unwrap();

        assert_eq!(user.id, "7");
        assert!(user.bookmarks.is_empty());
    }
}
