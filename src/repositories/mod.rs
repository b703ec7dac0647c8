pub mod comment_repository;
pub mod post_repository;
pub mod schema;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::RepoError;
use crate::models::comment::{Comment, NewComment};
use crate::models::post::{NewPost, Post, PostSummary};

pub use comment_repository::PgCommentRepository;
pub use post_repository::PgPostRepository;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a row and returns the id storage assigned to it.
    async fn insert(&self, post: NewPost) -> Result<i32, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Public posts whose `expose_until` is unset or not before `today`,
    /// newest first.
    async fn list_visible(&self, today: NaiveDate) -> Result<Vec<PostSummary>, RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> Result<i32, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError>;

    /// All comments of a post, newest first.
    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
