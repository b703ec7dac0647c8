pub mod comment_services;
pub mod post_services;
pub mod upload_services;

use chrono::{NaiveDate, Utc};

/// Server's current calendar day in UTC, taken once per request.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
