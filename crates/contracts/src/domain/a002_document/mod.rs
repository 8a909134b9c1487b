pub mod dto;
pub mod upload;

pub use dto::DocumentListResponse;
pub use upload::{validate_upload, UploadRejection};

/// `GET` lists documents; `DELETE {DOCUMENTS_PATH}/{name}` removes one.
pub const DOCUMENTS_PATH: &str = "/documents";

pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field name expected by the upload endpoint.
pub const UPLOAD_FIELD: &str = "file";
