pub mod action;

pub use action::{ActionOutcome, ActionResponse};
