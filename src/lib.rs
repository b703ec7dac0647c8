pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

use std::path::PathBuf;
use std::sync::Arc;

use crate::repositories::{CommentRepository, PostRepository};
use crate::services::comment_services::CommentService;
use crate::services::post_services::PostService;
use crate::services::upload_services::UploadService;

pub use handlers::configure;

#[derive(Clone)]
pub struct AppState {
    pub post_service: PostService,
    pub comment_service: CommentService,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            post_service: PostService::new(posts.clone()),
            comment_service: CommentService::new(comments, posts),
            upload_service: UploadService::new(upload_dir),
        }
    }
}
