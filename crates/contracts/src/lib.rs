//! Wire contracts between the DocChat web client and the chat server.
//!
//! Everything here is plain Rust so it can be unit-tested natively and
//! shared with any server implementation that speaks the same JSON.

pub mod domain;
pub mod shared;
