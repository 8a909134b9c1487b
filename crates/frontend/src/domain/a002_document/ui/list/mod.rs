//! Documents UI Module (MVVM Standard)
//!
//! Structure:
//! - file_selection.rs: file input ↔ upload button state machine
//! - list_view.rs: what the document list shows
//! - model.rs: list/upload/delete API functions
//! - view_model.rs: DocumentsVm with RwSignals
//! - view.rs: Main component DocumentPanel

pub mod file_selection;
pub mod list_view;
mod model;
mod view;
mod view_model;

pub use view::DocumentPanel;
