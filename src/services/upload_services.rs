// src/services/upload_services.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, warn};
use rand::Rng;

use crate::error::{AppError, RepoError, Result};

/// URL prefix under which stored uploads are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// `.ext` of the client-supplied name, or an empty string.
pub fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

/// `<unix-millis>-<random below 1e9><.ext>`; the random part keeps
/// uploads landing in the same millisecond apart.
pub fn generate_file_name(original_name: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        suffix,
        extension_of(original_name)
    )
}

/// Strips anything but the final path component so requests cannot escape
/// the upload directory.
pub fn sanitize_file_name(requested: &str) -> Option<&str> {
    Path::new(requested)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.starts_with('.'))
}

pub fn content_type_for(file_name: &str) -> mime::Mime {
    match Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("webp") => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the upload directory if it is missing.
    pub fn prepare(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// Persists the bytes under a freshly generated name and returns the
    /// public path, e.g. `/uploads/1723449600000-123456789.png`.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let file_name = generate_file_name(original_name);
        let path = self.dir.join(&file_name);

        if let Err(e) = tokio::fs::write(&path, bytes).await {
            // A failed write can leave a truncated file behind.
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("could not remove partial upload {}: {}", file_name, cleanup);
                }
            }
            return Err(AppError::internal("이미지 저장 실패")(RepoError::Io(e)));
        }

        info!("stored upload {} ({} bytes)", file_name, bytes.len());
        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

    /// Reads a stored upload; `Ok(None)` when the name is invalid or nothing
    /// is there. Any other IO failure is an internal error.
    pub async fn read(&self, requested: &str) -> Result<Option<(Vec<u8>, mime::Mime)>> {
        let Some(file_name) = sanitize_file_name(requested) else {
            return Ok(None);
        };
        match tokio::fs::read(self.dir.join(file_name)).await {
            Ok(data) => Ok(Some((data, content_type_for(file_name)))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::internal("파일 읽기 실패")(RepoError::Io(e))),
        }
    }
}
