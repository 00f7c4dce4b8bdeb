pub mod admin;
pub mod auth;
pub mod booking;
pub mod contact;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    booking::configure(cfg);
    contact::configure(cfg);
    admin::configure(cfg);
}
