//! One-time table bootstrap, run by the `setup` binary before the API serves
//! traffic. Safe to run repeatedly: existing tables are left untouched.

use deadpool_postgres::Client;
use log::info;

use crate::error::RepoError;

const CREATE_POSTS: &str = "CREATE TABLE IF NOT EXISTS posts (
    id           SERIAL PRIMARY KEY,
    name         VARCHAR(255),
    breed        VARCHAR(255),
    age          INTEGER,
    cause        VARCHAR(255),
    message      TEXT,
    date         VARCHAR(255),
    password     VARCHAR(255),
    is_public    BOOLEAN NOT NULL DEFAULT TRUE,
    expose_until DATE NULL,
    lang         VARCHAR(255) NOT NULL DEFAULT 'ko',
    image_url    VARCHAR(255) NULL,
    created_at   TIMESTAMP NOT NULL DEFAULT now()
)";

// post_id is deliberately not a FOREIGN KEY: deleting a post keeps its comments.
const CREATE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comments (
    id         SERIAL PRIMARY KEY,
    post_id    INTEGER NOT NULL,
    name       VARCHAR(255),
    text       TEXT NOT NULL,
    password   VARCHAR(255) NOT NULL,
    created_at DATE NOT NULL DEFAULT CURRENT_DATE
)";

const CREATE_COMMENTS_POST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments (post_id)";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SchemaReport {
    pub posts_created: bool,
    pub comments_created: bool,
}

async fn has_table(client: &Client, table: &str) -> Result<bool, RepoError> {
    let row = client
        .query_one(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables \
             WHERE table_schema = current_schema() AND table_name = $1)",
            &[&table],
        )
        .await?;
    Ok(row.try_get(0)?)
}

/// Creates `posts` and `comments` if they are missing.
pub async fn ensure_schema(client: &Client) -> Result<SchemaReport, RepoError> {
    let mut report = SchemaReport::default();

    if !has_table(client, "posts").await? {
        client.batch_execute(CREATE_POSTS).await?;
        report.posts_created = true;
        info!("posts table created");
    }

    if !has_table(client, "comments").await? {
        client.batch_execute(CREATE_COMMENTS).await?;
        report.comments_created = true;
        info!("comments table created");
    }
    client.batch_execute(CREATE_COMMENTS_POST_INDEX).await?;

    Ok(report)
}
