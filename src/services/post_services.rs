// src/services/post_services.rs
use std::sync::Arc;
use log::{debug, info};

use crate::dtos::post_dtos::CreatePostDTO;
use crate::error::{AppError, Result};
use crate::models::post::{password_matches, Post, PostSummary};
use crate::repositories::PostRepository;
use super::today;

pub const POST_NOT_FOUND: &str = "글이 존재하지 않음";
/// Detail lookups answer with the shorter message.
pub const DETAIL_NOT_FOUND: &str = "존재하지 않음";
pub const PASSWORD_MISMATCH: &str = "비밀번호 불일치";

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreatePostDTO) -> Result<i32> {
        let id = self
            .repo
            .insert(input.into())
            .await
            .map_err(AppError::internal("등록 실패"))?;
        info!("post {} created", id);
        Ok(id)
    }

    /// Detail lookup. No visibility filtering: private and expired posts are
    /// still returned to anyone holding the id.
    pub async fn get(&self, id: i32) -> Result<Post> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(AppError::internal("DB 오류"))?
            .ok_or(AppError::NotFound(DETAIL_NOT_FOUND))
    }

    pub async fn list(&self) -> Result<Vec<PostSummary>> {
        let posts = self
            .repo
            .list_visible(today())
            .await
            .map_err(AppError::internal("DB 오류"))?;
        debug!("listed {} visible posts", posts.len());
        Ok(posts)
    }

    /// Hard delete gated by the post password. Comments on the post are kept.
    pub async fn delete(&self, id: i32, password: Option<&str>) -> Result<()> {
        let post = self
            .repo
            .find_by_id(id)
            .await
            .map_err(AppError::internal("삭제 실패"))?
            .ok_or(AppError::NotFound(POST_NOT_FOUND))?;

        if !password_matches(post.password.as_deref(), password) {
            return Err(AppError::Forbidden(PASSWORD_MISMATCH));
        }

        self.repo
            .delete(id)
            .await
            .map_err(AppError::internal("삭제 실패"))?;
        info!("post {} deleted", id);
        Ok(())
    }
}
