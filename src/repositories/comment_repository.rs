use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::error::RepoError;
use crate::models::comment::{Comment, NewComment};
use super::CommentRepository;

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: Pool,
}

impl PgCommentRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn comment_from_row(row: &Row) -> Result<Comment, tokio_postgres::Error> {
    Ok(Comment {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        name: row.try_get("name")?,
        text: row.try_get("text")?,
        password: row.try_get("password")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<i32, RepoError> {
        let client = self.pool.get().await?;
        let row = match comment.id {
            // An explicit id bypasses the sequence, so a later auto-assigned
            // id can collide with it and fail the insert.
            Some(id) => {
                client
                    .query_one(
                        "INSERT INTO comments (id, post_id, name, text, password, created_at) \
                         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
                        &[
                            &id,
                            &comment.post_id,
                            &comment.name,
                            &comment.text,
                            &comment.password,
                            &comment.created_at,
                        ],
                    )
                    .await?
            }
            None => {
                client
                    .query_one(
                        "INSERT INTO comments (post_id, name, text, password, created_at) \
                         VALUES ($1, $2, $3, $4, $5) RETURNING id",
                        &[
                            &comment.post_id,
                            &comment.name,
                            &comment.text,
                            &comment.password,
                            &comment.created_at,
                        ],
                    )
                    .await?
            }
        };
        Ok(row.try_get("id")?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, post_id, name, text, password, created_at FROM comments WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(row.as_ref().map(comment_from_row).transpose()?)
    }

    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, post_id, name, text, password, created_at FROM comments \
                 WHERE post_id = $1 ORDER BY created_at DESC, id DESC",
                &[&post_id],
            )
            .await?;
        let comments = rows
            .iter()
            .map(comment_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let client = self.pool.get().await?;
        client.execute("DELETE FROM comments WHERE id = $1", &[&id]).await?;
        Ok(())
    }
}
