pub mod error;
pub mod extract;
pub mod patch;
pub mod response;
pub mod security;
pub mod slug;
pub mod upload;
