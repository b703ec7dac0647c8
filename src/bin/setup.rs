// src/bin/setup.rs
//! Creates the `posts` and `comments` tables if they do not exist yet.
use anyhow::{Context, Result};
use log::info;

use memorial_be::config;
use memorial_be::repositories::schema::ensure_schema;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let pool = config::get_pg_pool()?;
    let client = pool.get().await.context("failed to connect to postgres")?;

    let report = ensure_schema(&client).await.context("schema setup failed")?;
    info!(
        "schema ready (posts created: {}, comments created: {})",
        report.posts_created, report.comments_created
    );
    Ok(())
}
