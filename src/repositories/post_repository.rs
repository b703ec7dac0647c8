// src/repositories/post_repository.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::error::RepoError;
use crate::models::post::{NewPost, Post, PostSummary};
use super::PostRepository;

const POST_COLUMNS: &str = "id, name, breed, age, cause, message, date, password, \
                            is_public, expose_until, lang, image_url, created_at";

const SUMMARY_COLUMNS: &str = "id, name, age, breed, cause, date, image_url, is_public, expose_until";

#[derive(Clone)]
pub struct PgPostRepository {
    pool: Pool,
}

impl PgPostRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &Row) -> Result<Post, tokio_postgres::Error> {
    Ok(Post {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        breed: row.try_get("breed")?,
        age: row.try_get("age")?,
        cause: row.try_get("cause")?,
        message: row.try_get("message")?,
        date: row.try_get("date")?,
        password: row.try_get("password")?,
        is_public: row.try_get("is_public")?,
        expose_until: row.try_get("expose_until")?,
        lang: row.try_get("lang")?,
        image_url: row.try_get("image_url")?,
        created_at: row.try_get("created_at")?,
    })
}

fn summary_from_row(row: &Row) -> Result<PostSummary, tokio_postgres::Error> {
    Ok(PostSummary {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        breed: row.try_get("breed")?,
        cause: row.try_get("cause")?,
        date: row.try_get("date")?,
        image_url: row.try_get("image_url")?,
        is_public: row.try_get("is_public")?,
        expose_until: row.try_get("expose_until")?,
    })
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert(&self, post: NewPost) -> Result<i32, RepoError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO posts \
                 (name, breed, age, cause, message, date, password, is_public, expose_until, lang, image_url) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
                 RETURNING id",
                &[
                    &post.name,
                    &post.breed,
                    &post.age,
                    &post.cause,
                    &post.message,
                    &post.date,
                    &post.password,
                    &post.is_public,
                    &post.expose_until,
                    &post.lang,
                    &post.image_url,
                ],
            )
            .await?;
        Ok(row.try_get("id")?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let client = self.pool.get().await?;
        let query = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);
        let row = client.query_opt(query.as_str(), &[&id]).await?;
        Ok(row.as_ref().map(post_from_row).transpose()?)
    }

    async fn list_visible(&self, today: NaiveDate) -> Result<Vec<PostSummary>, RepoError> {
        let client = self.pool.get().await?;
        let query = format!(
            "SELECT {} FROM posts \
             WHERE is_public = TRUE AND (expose_until IS NULL OR expose_until >= $1) \
             ORDER BY created_at DESC, id DESC",
            SUMMARY_COLUMNS
        );
        let rows = client.query(query.as_str(), &[&today]).await?;
        let posts = rows
            .iter()
            .map(summary_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let client = self.pool.get().await?;
        client.execute("DELETE FROM posts WHERE id = $1", &[&id]).await?;
        Ok(())
    }
}
