//! API utilities for frontend-backend communication
//!
//! The chat server serves this page itself, so requests go to the page
//! origin unless the build sets `DOCCHAT_API_BASE`.

/// Get the base URL for API requests
///
/// # Returns
/// - `DOCCHAT_API_BASE` at compile time, if set (e.g. "http://localhost:5000")
/// - otherwise the page origin like "https://example.com"
/// - Empty string if window is not available, which keeps URLs relative
pub fn api_base() -> String {
    if let Some(base) = option_env!("DOCCHAT_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and an absolute API path
///
/// # Example
/// ```text
/// let url = join_url("http://localhost:5000/", "/documents");
/// assert_eq!(url, "http://localhost:5000/documents");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
