use crate::shared::api_utils::{api_base, join_url};
use contracts::domain::a001_chat_session::SessionId;

/// Per-page state shared by every server call: the session id and where
/// the API lives.
///
/// Provided once by `App` through Leptos context and passed explicitly to
/// model functions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatContext {
    pub session_id: SessionId,
    pub api_base: String,
}

impl ChatContext {
    /// New session against the configured API base.
    pub fn for_page() -> Self {
        Self::new(SessionId::generate(), api_base())
    }

    pub fn new(session_id: SessionId, api_base: impl Into<String>) -> Self {
        Self {
            session_id,
            api_base: api_base.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }
}
