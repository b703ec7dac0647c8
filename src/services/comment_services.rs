// src/services/comment_services.rs
use std::sync::Arc;
use log::{debug, info};

use crate::dtos::comment_dtos::CreateCommentDTO;
use crate::error::{AppError, Result};
use crate::models::comment::{Comment, NewComment};
use crate::models::post::password_matches;
use crate::repositories::{CommentRepository, PostRepository};
use super::post_services::{PASSWORD_MISMATCH, POST_NOT_FOUND};
use super::today;

pub const COMMENT_NOT_FOUND: &str = "댓글 없음";

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Stores a comment stamped with today's date.
    /// The parent post must exist at this moment; nothing re-checks it later.
    pub async fn create(&self, post_id: i32, input: CreateCommentDTO) -> Result<i32> {
        let parent = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(AppError::internal("댓글 등록 실패"))?;
        if parent.is_none() {
            return Err(AppError::NotFound(POST_NOT_FOUND));
        }

        let comment = NewComment {
            id: input.requested_id(),
            post_id,
            name: input.name,
            text: input.text,
            password: input.password,
            created_at: today(),
        };

        let id = self
            .comments
            .insert(comment)
            .await
            .map_err(AppError::internal("댓글 등록 실패"))?;
        info!("comment {} created on post {}", id, post_id);
        Ok(id)
    }

    pub async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>> {
        let comments = self
            .comments
            .list_by_post(post_id)
            .await
            .map_err(AppError::internal("댓글 불러오기 실패"))?;
        debug!("post {} has {} comments", post_id, comments.len());
        Ok(comments)
    }

    /// Deletes a comment when `password` matches either the comment's own
    /// password or its parent post's. A dangling parent leaves only the
    /// comment password. The reads and the delete are not one transaction.
    pub async fn delete(&self, comment_id: i32, password: Option<&str>) -> Result<()> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await
            .map_err(AppError::internal("삭제 실패"))?
            .ok_or(AppError::NotFound(COMMENT_NOT_FOUND))?;

        let parent = self
            .posts
            .find_by_id(comment.post_id)
            .await
            .map_err(AppError::internal("삭제 실패"))?;

        let is_comment_writer = password_matches(Some(comment.password.as_str()), password);
        let is_post_owner = parent
            .as_ref()
            .is_some_and(|post| password_matches(post.password.as_deref(), password));

        if !is_comment_writer && !is_post_owner {
            return Err(AppError::Forbidden(PASSWORD_MISMATCH));
        }

        self.comments
            .delete(comment_id)
            .await
            .map_err(AppError::internal("삭제 실패"))?;
        info!("comment {} deleted", comment_id);
        Ok(())
    }
}
