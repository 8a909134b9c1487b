pub mod a001_chat_session;
pub mod a002_document;
