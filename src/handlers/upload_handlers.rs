// src/handlers/upload_handlers.rs
use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use futures::StreamExt;
use log::warn;

use crate::config::MAX_UPLOAD_BYTES;
use crate::dtos::upload_dtos::UploadOut;
use crate::error::{AppError, Result};
use crate::AppState;

pub const MISSING_IMAGE: &str = "이미지가 필요합니다";
pub const IMAGE_TOO_LARGE: &str = "이미지는 10MB 이하만 가능합니다";
pub const MALFORMED_UPLOAD: &str = "잘못된 업로드 요청";

/// POST /api/upload
/// Accepts one file in the `image` field. Bytes are held in memory until the
/// whole field has arrived under the size ceiling, so a rejected upload never
/// touches the disk.
#[post("/upload")]
pub async fn upload_image(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("multipart error: {}", e);
            AppError::BadRequest(MALFORMED_UPLOAD)
        })?;

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        let target = match (field.name(), file_name) {
            (Some("image"), Some(name)) if image.is_none() => Some(name),
            _ => None,
        };

        let mut buf = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| {
                warn!("upload read error: {}", e);
                AppError::BadRequest(MALFORMED_UPLOAD)
            })?;
            if target.is_none() {
                continue;
            }
            if buf.len() + bytes.len() > MAX_UPLOAD_BYTES {
                warn!("upload rejected: exceeds {} bytes", MAX_UPLOAD_BYTES);
                return Err(AppError::BadRequest(IMAGE_TOO_LARGE));
            }
            buf.extend_from_slice(&bytes);
        }

        if let Some(name) = target {
            image = Some((name, buf));
        }
    }

    let (original_name, bytes) = image.ok_or(AppError::BadRequest(MISSING_IMAGE))?;
    let image_url = state.upload_service.store(&original_name, &bytes).await?;

    Ok(HttpResponse::Created().json(UploadOut { image_url }))
}

/// GET /uploads/{filename}
#[get("/uploads/{filename}")]
pub async fn serve_upload(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let (data, content_type) = state
        .upload_service
        .read(&path.into_inner())
        .await?
        .ok_or(AppError::NotFound("파일 없음"))?;

    Ok(HttpResponse::Ok().content_type(content_type).body(data))
}
