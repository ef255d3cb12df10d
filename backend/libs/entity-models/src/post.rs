use crate::error::{ModelError, Result};
use crate::serde_utils::{lenient_timestamp, null_as_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Review,
    Photo,
    VideoHighlight,
    #[default]
    #[serde(other)]
    Text,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Review => "review",
            PostType::Photo => "photo",
            PostType::VideoHighlight => "video_highlight",
            PostType::Text => "text",
        }
    }
}

/// A piece of user-generated content attached to a game.
///
/// Voter collections are sets, so a voter listed twice in the upstream
/// payload still counts once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upvotes: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: BTreeSet<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub post_type: PostType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_story: bool,
    #[serde(default)]
    pub game_id: Option<String>,
}

impl Post {
    /// Minimal post with no votes, used by fixtures and the in-memory store.
    pub fn new(id: impl Into<String>, author_email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author_email: author_email.into(),
            content: String::new(),
            created_at: None,
            upvotes: BTreeSet::new(),
            likes: BTreeSet::new(),
            post_type: PostType::default(),
            is_story: false,
            game_id: None,
        }
    }

    /// Map an untyped entity-API document onto a validated post
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let post: Post = serde_json::from_value(value)?;
        if post.id.trim().is_empty() {
            return Err(ModelError::MissingField("id"));
        }
        Ok(post)
    }

    pub fn upvote_count(&self) -> usize {
        self.upvotes.len()
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Upvotes plus likes
    pub fn engagement_count(&self) -> usize {
        self.upvote_count() + self.like_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_payload() {
        let post = Post::from_value(json!({
            "id": "p1",
            "authorEmail": "coach@varsityhub.app",
            "content": "Great game tonight",
            "createdAt": "2026-10-01T18:30:00Z",
            "upvotes": ["a@x.com", "b@x.com"],
            "likes": ["c@x.com"],
            "type": "video_highlight",
            "isStory": true,
            "gameId": "g42"
        }))
        .unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.post_type, PostType::VideoHighlight);
        assert_eq!(post.upvote_count(), 2);
        assert_eq!(post.engagement_count(), 3);
        assert!(post.is_story);
        assert_eq!(post.game_id.as_deref(), Some("g42"));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_from_value_defaults() {
        let post = Post::from_value(json!({
            "id": "p2",
            "upvotes": null,
            "likes": null,
            "type": "something_new"
        }))
        .unwrap();

        assert_eq!(post.upvote_count(), 0);
        assert_eq!(post.like_count(), 0);
        assert_eq!(post.content, "");
        assert_eq!(post.post_type, PostType::Text);
        assert!(post.created_at.is_none());
        assert!(!post.is_story);
    }

    #[test]
    fn test_created_at_formats() {
        use chrono::TimeZone;

        let naive = Post::from_value(json!({ "id": "p1", "createdAt": "2026-10-01T18:30:00.000" })).unwrap();
        assert_eq!(naive.created_at, Utc.with_ymd_and_hms(2026, 10, 1, 18, 30, 0).single());

        let date_only = Post::from_value(json!({ "id": "p2", "createdAt": "2026-10-01" })).unwrap();
        assert_eq!(date_only.created_at, Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).single());

        let garbage = Post::from_value(json!({ "id": "p3", "createdAt": "yesterday" })).unwrap();
        assert!(garbage.created_at.is_none());
    }

    #[test]
    fn test_duplicate_voters_count_once() {
        let post = Post::from_value(json!({
            "id": "p3",
            "upvotes": ["a@x.com", "a@x.com", "b@x.com"]
        }))
        .unwrap();
        assert_eq!(post.upvote_count(), 2);
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = Post::from_value(json!({ "id": "  " })).unwrap_err();
        assert!(matches!(err, ModelError::MissingField("id")));

        let err = Post::from_value(json!({ "content": "no id" })).unwrap_err();
        assert!(matches!(err, ModelError::InvalidPayload(_)));
    }
}
