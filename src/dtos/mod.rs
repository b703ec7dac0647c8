pub mod comment_dtos;
pub mod post_dtos;
pub mod upload_dtos;

use serde::Serialize;

/// Body of a successful create: `{"id": n}`.
#[derive(Debug, Serialize)]
pub struct CreatedOut {
    pub id: i32,
}

/// Body of a successful delete: `{"success": true}`.
#[derive(Debug, Serialize)]
pub struct SuccessOut {
    pub success: bool,
}

impl SuccessOut {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
