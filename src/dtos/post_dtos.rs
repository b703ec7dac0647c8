use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::config::DEFAULT_LANG;
use crate::models::post::NewPost;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostDTO {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub cause: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub password: Option<String>,
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub expose_until: Option<NaiveDate>,
    pub lang: Option<String>,
    pub image_url: Option<String>,
}

/// Body of both delete endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteDTO {
    pub password: Option<String>,
}

impl From<CreatePostDTO> for NewPost {
    fn from(dto: CreatePostDTO) -> Self {
        NewPost {
            name: dto.name,
            breed: dto.breed,
            age: dto.age,
            cause: dto.cause,
            message: dto.message,
            date: dto.date,
            password: dto.password,
            is_public: dto.is_public.unwrap_or(true),
            expose_until: dto.expose_until,
            lang: dto.lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            image_url: dto.image_url,
        }
    }
}

// Date pickers submit "" when cleared.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
