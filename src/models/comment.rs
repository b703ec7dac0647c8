use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub name: Option<String>,
    pub text: String,
    pub password: String,
    pub created_at: NaiveDate,
}

/// Values for a new `comments` row. `id` is honored when the client sent one.
/// `created_at` is a calendar day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: Option<i32>,
    pub post_id: i32,
    pub name: Option<String>,
    pub text: String,
    pub password: String,
    pub created_at: NaiveDate,
}
