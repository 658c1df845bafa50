//! Forum repository implementation

use chrono::Utc;
use crate::database::{DatabasePool, Dataset};
use crate::models::forum::{
    Comment, ForumPost, Votes, VoteAction, CreatePostRequest, UpdatePostRequest,
    CreateCommentRequest, UpdateCommentRequest,
};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::next_id;

#[derive(Clone, Debug)]
pub struct ForumRepository {
    pool: DatabasePool,
}

fn post_mut(data: &mut Dataset, post_id: i64) -> Result<&mut ForumPost> {
    data.forum
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or(CampusError::PostNotFound { post_id })
}

fn comment_mut(post: &mut ForumPost, comment_id: i64) -> Result<&mut Comment> {
    let post_id = post.id;
    post.comments
        .iter_mut()
        .find(|c| c.id == comment_id)
        .ok_or(CampusError::CommentNotFound { post_id, comment_id })
}

impl ForumRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub async fn list_posts(&self) -> Result<Vec<ForumPost>> {
        Ok(self.pool.query("forum.list", |data| data.forum.clone()).await)
    }

    pub async fn find_post(&self, post_id: i64) -> Result<Option<ForumPost>> {
        Ok(self
            .pool
            .query("forum.find", |data| data.forum.iter().find(|p| p.id == post_id).cloned())
            .await)
    }

    /// New post with zero votes and no comments
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<ForumPost> {
        self.pool
            .mutate("forum.create_post", |data| {
                let post = ForumPost {
                    id: next_id(data.forum.iter().map(|p| p.id)),
                    title: request.title,
                    content: request.content,
                    author: request.author,
                    date: Utc::now(),
                    votes: Votes::default(),
                    comments: Vec::new(),
                    user_id: request.user_id,
                };
                data.forum.push(post.clone());
                Ok(post)
            })
            .await
    }

    pub async fn update_post(&self, post_id: i64, request: UpdatePostRequest) -> Result<ForumPost> {
        self.pool
            .mutate("forum.update_post", |data| {
                let post = post_mut(data, post_id)?;
                if let Some(title) = request.title {
                    post.title = title;
                }
                if let Some(content) = request.content {
                    post.content = content;
                }
                Ok(post.clone())
            })
            .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<()> {
        self.pool
            .mutate("forum.delete_post", |data| {
                let index = data
                    .forum
                    .iter()
                    .position(|p| p.id == post_id)
                    .ok_or(CampusError::PostNotFound { post_id })?;
                data.forum.remove(index);
                Ok(())
            })
            .await
    }

    /// Append a comment; ids are unique within the post
    pub async fn add_comment(&self, post_id: i64, request: CreateCommentRequest) -> Result<Comment> {
        self.pool
            .mutate("forum.add_comment", |data| {
                let post = post_mut(data, post_id)?;
                let comment = Comment {
                    id: next_id(post.comments.iter().map(|c| c.id)),
                    content: request.content,
                    author: request.author,
                    date: Utc::now(),
                    votes: Votes::default(),
                    user_id: request.user_id,
                };
                post.comments.push(comment.clone());
                Ok(comment)
            })
            .await
    }

    pub async fn update_comment(&self, post_id: i64, comment_id: i64, request: UpdateCommentRequest) -> Result<Comment> {
        self.pool
            .mutate("forum.update_comment", |data| {
                let comment = comment_mut(post_mut(data, post_id)?, comment_id)?;
                if let Some(content) = request.content {
                    comment.content = content;
                }
                Ok(comment.clone())
            })
            .await
    }

    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<()> {
        self.pool
            .mutate("forum.delete_comment", |data| {
                let post = post_mut(data, post_id)?;
                let index = post
                    .comments
                    .iter()
                    .position(|c| c.id == comment_id)
                    .ok_or(CampusError::CommentNotFound { post_id, comment_id })?;
                post.comments.remove(index);
                Ok(())
            })
            .await
    }

    /// Apply a vote to a post and return its new tally
    pub async fn vote_post(&self, post_id: i64, action: VoteAction) -> Result<Votes> {
        self.pool
            .mutate("forum.vote_post", |data| {
                let post = post_mut(data, post_id)?;
                post.votes.apply(action);
                Ok(post.votes)
            })
            .await
    }

    /// Apply a vote to a comment and return its new tally
    pub async fn vote_comment(&self, post_id: i64, comment_id: i64, action: VoteAction) -> Result<Votes> {
        self.pool
            .mutate("forum.vote_comment", |data| {
                let comment = comment_mut(post_mut(data, post_id)?, comment_id)?;
                comment.votes.apply(action);
                Ok(comment.votes)
            })
            .await
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.pool.query("forum.count", |data| data.forum.len()).await)
    }
}
