pub use content::*;
pub use photo::*;
pub use rsvp::*;
pub use session::*;

mod content;
mod photo;
mod rsvp;
mod session;
