use thiserror::Error;

/// Transport-level failure of a call to the chat server.
///
/// Application errors (`{"error": ...}` bodies) are not represented here;
/// they arrive as [`contracts::shared::ActionOutcome::Failed`].
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("stream read failed: {0}")]
    Stream(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl ApiError {
    pub fn stream(e: wasm_bindgen::JsValue) -> Self {
        ApiError::Stream(format!("{e:?}"))
    }
}
