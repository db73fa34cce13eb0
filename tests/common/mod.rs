//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{gateway_with, post_json, MockHttpConfig};
//!
//! let mock = MockHttpConfig::new().with_json("/posts", 200, json!([])).build();
//! let gateway = gateway_with(&mock);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use blogfront::gateway::Gateway;
use blogfront::models::User;
use blogfront::state::{UpdatePolicy, UserContext};
use serde_json::{json, Value};
use std::sync::Arc;

pub const ORIGIN: &str = "http://localhost:5000";

pub fn url(endpoint: &str) -> String {
    format!("{}{}", ORIGIN, endpoint)
}

pub fn gateway_with(mock: &MockHttpClient) -> Gateway {
    Gateway::new(ORIGIN, Arc::new(mock.clone()))
}

/// A post as the API serves it.
pub fn post_json(id: &str, title: &str, featured: bool) -> Value {
    json!({
        "_id": id,
        "author": { "name": "Mao", "username": "mao" },
        "title": title,
        "imageURL": format!("https://img.example/{}.jpg", id),
        "imageCredit": "Unsplash",
        "timestamp": "2024-03-02T10:00:00.000Z",
        "category": "javascript/typescript",
        "text": "Body text",
        "commentCount": 0,
        "isPublished": true,
        "isFeatured": featured,
        "objectFit": "cover",
        "url": format!("/posts/{}", id),
        "clientURL": format!("/posts/{}", id)
    })
}

pub fn user_json(id: &str, bookmarks: &[&str]) -> Value {
    json!({
        "_id": id,
        "username": "reader",
        "name": "Reader",
        "bookmarks": bookmarks
    })
}

pub fn test_user(id: &str, bookmarks: &[&str]) -> User {
    serde_json::from_value(user_json(id, bookmarks)).expect("valid user fixture")
}

pub fn signed_in(bookmarks: &[&str], policy: UpdatePolicy) -> UserContext {
    UserContext::signed_in(test_user("u1", bookmarks), policy)
}
