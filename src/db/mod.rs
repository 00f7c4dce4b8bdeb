pub use bookings::*;
pub use contact_messages::*;
pub use db::*;
pub use hotels::*;
pub use rooms::*;
pub use users::*;

mod bookings;
mod contact_messages;
mod db;
mod hotels;
mod rooms;
mod users;
