mod top_upvoted;

pub use top_upvoted::TopUpvotedRecall;
