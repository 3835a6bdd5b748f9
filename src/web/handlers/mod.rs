pub mod auth;
pub mod content;
pub mod photos;
pub mod public;
pub mod rsvp;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    content::configure(cfg);
    photos::configure(cfg);
    rsvp::configure(cfg);
}
