pub use booking::*;
pub use booking_status::*;
pub use contact_message::*;
pub use hotel::*;
pub use payment_method::*;
pub use payment_status::*;
pub use room::*;
pub use room_type::*;
pub use user::*;

mod booking;
mod booking_status;
mod contact_message;
mod hotel;
mod payment_method;
mod payment_status;
mod room;
mod room_type;
mod user;
