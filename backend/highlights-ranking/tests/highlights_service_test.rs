use async_trait::async_trait;
use entity_models::{
    EntityApi, EntitySnapshot, InMemoryEntityStore, Post, PostFilter, UserInteraction,
    UserProfile, UserRole,
};
use highlights_ranking::{FeedRanker, HighlightsService, RankingError};
use mockall::mock;

mock! {
    pub Api {}

    #[async_trait]
    impl EntityApi for Api {
        async fn list_posts(&self, order_by: &str) -> anyhow::Result<Vec<Post>>;
        async fn filter_posts(&self, filter: &PostFilter) -> anyhow::Result<Vec<Post>>;
        async fn filter_interactions(&self, user_email: &str) -> anyhow::Result<Vec<UserInteraction>>;
        async fn me(&self) -> anyhow::Result<Option<UserProfile>>;
        async fn find_users_by_email(&self, email: &str) -> anyhow::Result<Vec<UserProfile>>;
    }
}

fn post(id: &str, upvotes: usize) -> Post {
    let mut post = Post::new(id, "author@varsityhub.app");
    post.upvotes = (0..upvotes).map(|i| format!("v{}@varsityhub.app", i)).collect();
    post
}

#[tokio::test]
async fn test_highlights_for_me_fetches_and_ranks() {
    let mut api = MockApi::new();
    api.expect_me()
        .times(1)
        .returning(|| Ok(Some(UserProfile::new("me@varsityhub.app", UserRole::Fan))));
    api.expect_list_posts()
        .withf(|order_by| order_by == "-createdAt")
        .times(1)
        .returning(|_| Ok(vec![post("quiet", 1), post("loud", 42)]));
    api.expect_filter_interactions()
        .withf(|email| email == "me@varsityhub.app")
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let service = HighlightsService::new(api, FeedRanker::default());
    let feed = service.highlights_for_me().await.unwrap();

    assert_eq!(feed[0].post.id, "loud");
    assert_eq!(feed[1].post.id, "quiet");
}

#[tokio::test]
async fn test_not_signed_in() {
    let mut api = MockApi::new();
    api.expect_me().returning(|| Ok(None));
    api.expect_list_posts().never();

    let service = HighlightsService::new(api, FeedRanker::default());
    let err = service.highlights_for_me().await.unwrap_err();
    assert!(matches!(err, RankingError::NotSignedIn));
}

#[tokio::test]
async fn test_unknown_viewer() {
    let mut api = MockApi::new();
    api.expect_find_users_by_email().returning(|_| Ok(Vec::new()));
    api.expect_list_posts().never();

    let service = HighlightsService::new(api, FeedRanker::default());
    let err = service.highlights_for("ghost@varsityhub.app").await.unwrap_err();
    assert!(matches!(err, RankingError::ViewerNotFound(email) if email == "ghost@varsityhub.app"));
}

#[tokio::test]
async fn test_upstream_failure_is_surfaced() {
    let mut api = MockApi::new();
    api.expect_find_users_by_email()
        .returning(|_| Ok(vec![UserProfile::new("fan@varsityhub.app", UserRole::Fan)]));
    api.expect_list_posts()
        .returning(|_| Err(anyhow::anyhow!("entity API unavailable")));

    let service = HighlightsService::new(api, FeedRanker::default());
    let err = service.highlights_for("fan@varsityhub.app").await.unwrap_err();
    assert!(matches!(err, RankingError::Upstream(_)));
}

#[tokio::test]
async fn test_snapshot_store_end_to_end() {
    let snapshot = EntitySnapshot::from_json(
        r#"{
            "posts": [
                {"id": "p1", "content": "Hoops tonight", "upvotes": ["a", "b"], "type": "photo"},
                {"id": "p2", "content": "Swim meet", "upvotes": null},
                {"id": "p3", "content": "Hoops recap", "upvotes": ["a","b","c","d","e","f","g","h","i","j","k"]}
            ],
            "users": [
                {"email": "fan@varsityhub.app", "userRole": "fan", "sportsInterests": ["hoops"]}
            ],
            "interactions": [
                {"userEmail": "fan@varsityhub.app", "interactionType": "save", "targetType": "post", "targetId": "p2"}
            ],
            "me": "fan@varsityhub.app"
        }"#,
    )
    .unwrap();

    let service = HighlightsService::new(InMemoryEntityStore::new(snapshot), FeedRanker::default());
    let feed = service.highlights_for_me().await.unwrap();
    let ids: Vec<_> = feed.iter().map(|r| r.post.id.as_str()).collect();

    // Lead is the top-upvoted track; the tail is the algorithmic pool
    assert_eq!(ids, vec!["p3", "p1", "p2", "p1", "p2"]);
    let p1_score = feed[3].score.unwrap();
    assert_eq!(p1_score.interest, 10.0);
    assert_eq!(p1_score.interaction, 5.0);
}
