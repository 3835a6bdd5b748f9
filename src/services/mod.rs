pub mod auth;
pub mod countdown;
pub mod editable;
pub mod upload;
