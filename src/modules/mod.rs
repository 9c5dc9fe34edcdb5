pub mod admin;
pub mod auth;
pub mod category;
pub mod content;
pub mod history;
pub mod slide;
