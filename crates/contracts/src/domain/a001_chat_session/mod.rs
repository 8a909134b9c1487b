pub mod dto;
pub mod session_id;
pub mod stream;

pub use dto::{ChatStreamRequest, ClearConversationRequest, StreamPayload};
pub use session_id::SessionId;
pub use stream::{StreamDecoder, StreamEvent};

/// Streaming chat endpoint.
pub const CHAT_STREAM_PATH: &str = "/chat-stream";

/// Drops the server-side history of a session.
pub const CLEAR_CONVERSATION_PATH: &str = "/clear_conversation";
