//! Forum service implementation
//!
//! Posts, comments and voting. Votes are plain counters without a
//! per-user ledger; removing a vote never takes a counter below zero.

use std::collections::HashMap;
use tracing::{debug, info};
use crate::database::DatabaseService;
use crate::models::{
    Comment, CommentWithAuthor, CreateCommentRequest, CreatePostRequest, ForumPost, PostWithAuthor,
    UpdateCommentRequest, UpdatePostRequest, User, UserFilter, VoteAction, Votes,
};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_user_action;

#[derive(Clone)]
pub struct ForumService {
    database: DatabaseService,
}

impl ForumService {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    pub async fn list(&self) -> Result<Vec<ForumPost>> {
        self.database.forum.list_posts().await
    }

    /// Every post and comment joined with its author's account
    pub async fn list_posts_with_authors(&self) -> Result<Vec<PostWithAuthor>> {
        let posts = self.list().await?;
        let users: HashMap<String, User> = self
            .database
            .users
            .list(&UserFilter::all())
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        debug!(posts = posts.len(), "Joining forum posts with authors");
        Ok(posts
            .into_iter()
            .map(|mut post| {
                let comments = std::mem::take(&mut post.comments)
                    .into_iter()
                    .map(|comment| CommentWithAuthor {
                        user: users.get(&comment.user_id).cloned(),
                        comment,
                    })
                    .collect();
                PostWithAuthor {
                    user: users.get(&post.user_id).cloned(),
                    post,
                    comments,
                }
            })
            .collect())
    }

    pub async fn get_post(&self, post_id: i64) -> Result<ForumPost> {
        self.database
            .forum
            .find_post(post_id)
            .await?
            .ok_or(CampusError::PostNotFound { post_id })
    }

    pub async fn add_post(&self, mut request: CreatePostRequest) -> Result<ForumPost> {
        request.title = required(&request.title, "Post title")?;
        request.content = required(&request.content, "Post content")?;
        self.require_author(&request.user_id).await?;

        let post = self.database.forum.create_post(request).await?;
        log_user_action(&post.user_id, "add_post", Some(&post.id.to_string()));
        info!(post_id = post.id, "Forum post created");
        Ok(post)
    }

    pub async fn edit_post(&self, post_id: i64, mut request: UpdatePostRequest) -> Result<ForumPost> {
        if let Some(title) = request.title.take() {
            request.title = Some(required(&title, "Post title")?);
        }
        if let Some(content) = request.content.take() {
            request.content = Some(required(&content, "Post content")?);
        }
        self.database.forum.update_post(post_id, request).await
    }

    /// Remove a post together with its comments
    pub async fn remove_post(&self, post_id: i64) -> Result<()> {
        self.database.forum.delete_post(post_id).await?;
        info!(post_id, "Forum post removed");
        Ok(())
    }

    pub async fn add_comment(&self, post_id: i64, mut request: CreateCommentRequest) -> Result<Comment> {
        request.content = required(&request.content, "Comment")?;
        self.require_author(&request.user_id).await?;

        let comment = self.database.forum.add_comment(post_id, request).await?;
        log_user_action(&comment.user_id, "add_comment", Some(&post_id.to_string()));
        Ok(comment)
    }

    pub async fn edit_comment(&self, post_id: i64, comment_id: i64, mut request: UpdateCommentRequest) -> Result<Comment> {
        if let Some(content) = request.content.take() {
            request.content = Some(required(&content, "Comment")?);
        }
        self.database.forum.update_comment(post_id, comment_id, request).await
    }

    pub async fn remove_comment(&self, post_id: i64, comment_id: i64) -> Result<()> {
        self.database.forum.delete_comment(post_id, comment_id).await
    }

    pub async fn upvote(&self, post_id: i64) -> Result<Votes> {
        self.database.forum.vote_post(post_id, VoteAction::Upvote).await
    }

    pub async fn remove_upvote(&self, post_id: i64) -> Result<Votes> {
        self.database.forum.vote_post(post_id, VoteAction::RemoveUpvote).await
    }

    pub async fn downvote(&self, post_id: i64) -> Result<Votes> {
        self.database.forum.vote_post(post_id, VoteAction::Downvote).await
    }

    pub async fn remove_downvote(&self, post_id: i64) -> Result<Votes> {
        self.database.forum.vote_post(post_id, VoteAction::RemoveDownvote).await
    }

    pub async fn upvote_comment(&self, post_id: i64, comment_id: i64) -> Result<Votes> {
        self.database.forum.vote_comment(post_id, comment_id, VoteAction::Upvote).await
    }

    pub async fn remove_comment_upvote(&self, post_id: i64, comment_id: i64) -> Result<Votes> {
        self.database.forum.vote_comment(post_id, comment_id, VoteAction::RemoveUpvote).await
    }

    pub async fn downvote_comment(&self, post_id: i64, comment_id: i64) -> Result<Votes> {
        self.database.forum.vote_comment(post_id, comment_id, VoteAction::Downvote).await
    }

    pub async fn remove_comment_downvote(&self, post_id: i64, comment_id: i64) -> Result<Votes> {
        self.database.forum.vote_comment(post_id, comment_id, VoteAction::RemoveDownvote).await
    }

    async fn require_author(&self, user_id: &str) -> Result<()> {
        match self.database.users.find_by_id(user_id).await? {
            Some(user) if user.is_active() => Ok(()),
            Some(_) => Err(CampusError::PermissionDenied("Suspended users cannot post".to_string())),
            None => Err(CampusError::UserNotFound { user_id: user_id.to_string() }),
        }
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CampusError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
