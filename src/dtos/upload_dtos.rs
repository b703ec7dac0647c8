use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadOut {
    pub image_url: String,
}
