use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Full `posts` row, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i32,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub cause: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub password: Option<String>,
    pub is_public: bool,
    pub expose_until: Option<NaiveDate>,
    pub lang: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// List projection: no message, password or lang.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub cause: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub is_public: bool,
    pub expose_until: Option<NaiveDate>,
}

/// Values for a new `posts` row; `id` and `created_at` come from storage.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub cause: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub password: Option<String>,
    pub is_public: bool,
    pub expose_until: Option<NaiveDate>,
    pub lang: String,
    pub image_url: Option<String>,
}

/// Shared-secret check used by both post and comment deletion.
/// An absent password on either side never matches.
pub fn password_matches(stored: Option<&str>, supplied: Option<&str>) -> bool {
    matches!((stored, supplied), (Some(s), Some(p)) if s == p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_list_columns_only() {
        let summary = PostSummary {
            id: 1,
            name: Some("Charlie".into()),
            age: Some(13),
            breed: None,
            cause: None,
            date: Some("2024-08-12".into()),
            image_url: None,
            is_public: true,
            expose_until: NaiveDate::from_ymd_opt(2024, 9, 12),
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Charlie");
        assert_eq!(json["expose_until"], "2024-09-12");
        assert!(json.get("message").is_none());
        assert!(json.get("password").is_none());
        assert!(json.get("lang").is_none());
    }

    #[test]
    fn password_requires_exact_match() {
        assert!(password_matches(Some("1234"), Some("1234")));
        assert!(!password_matches(Some("1234"), Some("1234 ")));
        assert!(!password_matches(Some("1234"), None));
        assert!(!password_matches(None, None));
        assert!(!password_matches(None, Some("")));
    }
}
