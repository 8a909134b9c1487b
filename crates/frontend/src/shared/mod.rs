pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod error;
pub mod icons;
pub mod markdown;
pub mod notice;
