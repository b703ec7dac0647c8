//! In-memory repositories and request builders shared by the API tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use memorial_be::error::RepoError;
use memorial_be::models::comment::{Comment, NewComment};
use memorial_be::models::post::{NewPost, Post, PostSummary};
use memorial_be::repositories::{CommentRepository, PostRepository};
use memorial_be::AppState;

fn unavailable() -> RepoError {
    RepoError::Other("database unavailable".into())
}

/// Same rule as the `list_visible` SQL: public, and `expose_until` unset or
/// not before `today`.
fn is_listed_on(post: &Post, today: NaiveDate) -> bool {
    post.is_public && post.expose_until.is_none_or(|until| until >= today)
}

fn summary(post: &Post) -> PostSummary {
    PostSummary {
        id: post.id,
        name: post.name.clone(),
        age: post.age,
        breed: post.breed.clone(),
        cause: post.cause.clone(),
        date: post.date.clone(),
        image_url: post.image_url.clone(),
        is_public: post.is_public,
        expose_until: post.expose_until,
    }
}

#[derive(Default)]
struct PostTable {
    rows: Vec<Post>,
    next_id: i32,
    ticks: i64,
}

/// Mirrors the Postgres repository: serial ids, `created_at` from the store,
/// newest-first listing.
#[derive(Default)]
pub struct MemoryPostRepository {
    table: Mutex<PostTable>,
    failing: AtomicBool,
}

impl MemoryPostRepository {
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, id: i32) -> bool {
        self.table.lock().unwrap().rows.iter().any(|p| p.id == id)
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<i32, RepoError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        table.ticks += 1;
        let id = table.next_id;
        let created_at = base_time() + Duration::seconds(table.ticks);
        table.rows.push(Post {
            id,
            name: post.name,
            breed: post.breed,
            age: post.age,
            cause: post.cause,
            message: post.message,
            date: post.date,
            password: post.password,
            is_public: post.is_public,
            expose_until: post.expose_until,
            lang: post.lang,
            image_url: post.image_url,
            created_at,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        self.check()?;
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list_visible(&self, today: NaiveDate) -> Result<Vec<PostSummary>, RepoError> {
        self.check()?;
        let table = self.table.lock().unwrap();
        let mut rows: Vec<&Post> = table.rows.iter().filter(|p| is_listed_on(p, today)).collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows.into_iter().map(summary).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.check()?;
        self.table.lock().unwrap().rows.retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct CommentTable {
    rows: Vec<Comment>,
    next_id: i32,
}

#[derive(Default)]
pub struct MemoryCommentRepository {
    table: Mutex<CommentTable>,
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<i32, RepoError> {
        let mut table = self.table.lock().unwrap();
        let id = match comment.id {
            Some(id) => id,
            None => {
                table.next_id += 1;
                table.next_id
            }
        };
        if table.rows.iter().any(|c| c.id == id) {
            return Err(RepoError::Other(format!("duplicate comment id {}", id)));
        }
        table.rows.push(Comment {
            id,
            post_id: comment.post_id,
            name: comment.name,
            text: comment.text,
            password: comment.password,
            created_at: comment.created_at,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let table = self.table.lock().unwrap();
        let mut rows: Vec<Comment> = table
            .rows
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.lock().unwrap().rows.retain(|c| c.id != id);
        Ok(())
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 8, 12)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub struct Harness {
    pub posts: Arc<MemoryPostRepository>,
    pub comments: Arc<MemoryCommentRepository>,
    pub upload_dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(MemoryPostRepository::default()),
            comments: Arc::new(MemoryCommentRepository::default()),
            upload_dir: TempDir::new().unwrap(),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.posts.clone(),
            self.comments.clone(),
            self.upload_dir.path(),
        )
    }

    pub fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

pub const BOUNDARY: &str = "memorialtestboundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Single-part multipart body. `filename: None` sends a plain text field.
pub fn multipart_body(field: &str, filename: Option<&str>, data: &[u8]) -> Vec<u8> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{}\"; filename=\"{}\"", field, name),
        None => format!("form-data; name=\"{}\"", field),
    };
    let mut body = format!(
        "--{}\r\nContent-Disposition: {}\r\nContent-Type: application/octet-stream\r\n\r\n",
        BOUNDARY, disposition
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}
