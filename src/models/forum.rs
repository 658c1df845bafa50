//! Forum model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::user::User;

/// Up/down vote counters; never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Votes {
    pub up_votes: u32,
    pub down_votes: u32,
}

impl Votes {
    pub fn apply(&mut self, vote: VoteAction) {
        match vote {
            VoteAction::Upvote => self.up_votes = self.up_votes.saturating_add(1),
            VoteAction::RemoveUpvote => self.up_votes = self.up_votes.saturating_sub(1),
            VoteAction::Downvote => self.down_votes = self.down_votes.saturating_add(1),
            VoteAction::RemoveDownvote => self.down_votes = self.down_votes.saturating_sub(1),
        }
    }

    /// Net score shown next to a post
    pub fn score(&self) -> i64 {
        i64::from(self.up_votes) - i64::from(self.down_votes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Upvote,
    RemoveUpvote,
    Downvote,
    RemoveDownvote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub votes: Votes,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub votes: Votes,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub author: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
}

/// Comment joined with its author's account, if it still exists
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Option<User>,
}

/// Post joined with its author's account, if it still exists
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAuthor {
    pub post: ForumPost,
    pub user: Option<User>,
    pub comments: Vec<CommentWithAuthor>,
}
