pub use db::*;

pub mod content;
pub mod photos;
pub mod rsvp;
pub mod sessions;

mod db;
