use crate::common::error::AppError;
use anyhow::Context;
use axum::extract::{multipart::Field, Multipart};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{error, info};

/// Public prefix under which the upload root is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDir {
    Images,
    Slides,
    Other,
}

impl UploadDir {
    pub fn for_field(name: &str) -> Self {
        match name {
            "poster" | "banner" | "thumbnail" => UploadDir::Images,
            "hero_image" | "image" => UploadDir::Slides,
            _ => UploadDir::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadDir::Images => "images",
            UploadDir::Slides => "slides",
            UploadDir::Other => "other",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavedFile {
    pub field: String,
    pub public_path: String,
    pub bytes: u64,
}

/// `<unix millis>-<random hex><.ext>`, keeping only an ASCII alphanumeric extension.
pub fn generate_file_name(original: Option<&str>) -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix: u32 = rand::random();

    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .take(10)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|ext| !ext.is_empty());

    match ext {
        Some(ext) => format!("{}-{:08x}.{}", millis, suffix, ext),
        None => format!("{}-{:08x}", millis, suffix),
    }
}

/// Streams one file field to disk under the directory its name maps to.
/// A failed write never leaves a partial file behind.
pub async fn save_field(upload_root: &Path, mut field: Field<'_>) -> Result<SavedFile, AppError> {
    let name = field.name().unwrap_or("").to_string();
    let dir = UploadDir::for_field(&name);
    let file_name = generate_file_name(field.file_name());

    let target_dir = upload_root.join(dir.as_str());
    fs::create_dir_all(&target_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", target_dir.display()))?;

    let target: PathBuf = target_dir.join(&file_name);
    let written = match write_field(&target, &mut field).await {
        Ok(written) => written,
        Err(e) => {
            error!("Upload of field {} failed: {}", name, e);
            if let Err(rm) = fs::remove_file(&target).await {
                if rm.kind() != std::io::ErrorKind::NotFound {
                    error!("Failed to remove partial upload {}: {}", target.display(), rm);
                }
            }
            return Err(e);
        }
    };

    let public_path = format!("{}/{}/{}", PUBLIC_PREFIX, dir.as_str(), file_name);
    info!("Stored upload field={} path={} bytes={}", name, public_path, written);

    Ok(SavedFile {
        field: name,
        public_path,
        bytes: written,
    })
}

async fn write_field(target: &Path, field: &mut Field<'_>) -> Result<u64, AppError> {
    let mut file = fs::File::create(target)
        .await
        .with_context(|| format!("Failed to create {}", target.display()))?;

    let mut written: u64 = 0;
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::Validation(format!("Upload interrupted: {}", e)))?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .with_context(|| format!("Failed to flush {}", target.display()))?;
    Ok(written)
}

/// Saves every file field in the request. Fields without a filename (plain form values,
/// empty file inputs) are skipped.
pub async fn save_all(upload_root: &Path, multipart: &mut Multipart) -> Result<Vec<SavedFile>, AppError> {
    let mut saved = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.file_name().map_or(true, str::is_empty) {
            continue;
        }
        saved.push(save_field(upload_root, field).await?);
    }

    Ok(saved)
}
