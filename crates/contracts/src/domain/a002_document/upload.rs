//! Client-side checks that mirror the upload limits enforced by the server.

/// Extensions the server indexes.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf"];

/// Request body limit of the server (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    UnsupportedType,
    TooLarge,
}

impl UploadRejection {
    pub fn message(&self) -> &'static str {
        match self {
            UploadRejection::UnsupportedType => "TXT 또는 PDF 파일만 업로드할 수 있습니다.",
            UploadRejection::TooLarge => "파일 크기는 16MB를 넘을 수 없습니다.",
        }
    }
}

pub fn validate_upload(file_name: &str, size: u64) -> Result<(), UploadRejection> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(UploadRejection::UnsupportedType),
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}
