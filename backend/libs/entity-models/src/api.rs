use crate::interaction::UserInteraction;
use crate::post::Post;
use crate::user::UserProfile;
use anyhow::Result;
use async_trait::async_trait;

/// Field filter accepted by `EntityApi::filter_posts`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub author_email: Option<String>,
    pub game_id: Option<String>,
    pub is_story: Option<bool>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(author) = &self.author_email {
            if &post.author_email != author {
                return false;
            }
        }
        if let Some(game_id) = &self.game_id {
            if post.game_id.as_ref() != Some(game_id) {
                return false;
            }
        }
        if let Some(is_story) = self.is_story {
            if post.is_story != is_story {
                return false;
            }
        }
        true
    }
}

/// The backend entity API the app talks to.
///
/// Implementations own transport, auth and caching. Callers fetch fresh on
/// every ranking or policy invocation.
#[async_trait]
pub trait EntityApi: Send + Sync {
    /// `order_by` uses the backend convention: a field name, `-` prefix for descending
    async fn list_posts(&self, order_by: &str) -> Result<Vec<Post>>;
    async fn filter_posts(&self, filter: &PostFilter) -> Result<Vec<Post>>;
    async fn filter_interactions(&self, user_email: &str) -> Result<Vec<UserInteraction>>;
    /// The signed-in user, if any
    async fn me(&self) -> Result<Option<UserProfile>>;
    async fn find_users_by_email(&self, email: &str) -> Result<Vec<UserProfile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_filter_matches() {
        let mut post = Post::new("p1", "a@x.com");
        post.game_id = Some("g1".to_string());

        assert!(PostFilter::default().matches(&post));
        assert!(PostFilter {
            author_email: Some("a@x.com".to_string()),
            game_id: Some("g1".to_string()),
            is_story: Some(false),
        }
        .matches(&post));
        assert!(!PostFilter {
            game_id: Some("g2".to_string()),
            ..Default::default()
        }
        .matches(&post));
        assert!(!PostFilter {
            is_story: Some(true),
            ..Default::default()
        }
        .matches(&post));
    }
}
