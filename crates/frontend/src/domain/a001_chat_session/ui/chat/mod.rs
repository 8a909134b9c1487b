//! Chat Session UI Module (MVVM Standard)
//!
//! Structure:
//! - transcript.rs: pure message list operations
//! - model.rs: chat stream and reset API functions
//! - view_model.rs: ChatVm with RwSignals and the exchange flow
//! - message.rs: message and notice rendering
//! - view.rs: Main component ChatPanel

mod message;
mod model;
pub mod transcript;
mod view;
mod view_model;

pub use view::ChatPanel;
