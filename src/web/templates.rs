use askama::Template;

use royalstay::booking::{BookingDraft, Step};
use royalstay::models::{Booking, Hotel, Room, RoomType};

use super::session::Session;

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub session: Session,
}

#[derive(Template)]
#[template(path = "public/hotels.html")]
pub struct HotelsTemplate {
    pub session: Session,
    pub hotels: Vec<Hotel>,
    pub search: String,
}

#[derive(Template)]
#[template(path = "public/hotel_details.html")]
pub struct HotelDetailsTemplate {
    pub session: Session,
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate {
    pub session: Session,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactTemplate {
    pub session: Session,
    pub success: bool,
    pub error: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub session: Session,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub session: Session,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "booking/flow.html")]
pub struct BookingFlowTemplate {
    pub session: Session,
    pub room: Room,
    pub room_type: RoomType,
    pub step: Step,
    pub draft: BookingDraft,
    pub error: Option<String>,
    pub today: String,
    pub nights: i64,
    pub total: String,
}

#[derive(Template)]
#[template(path = "booking/confirmation.html")]
pub struct BookingConfirmationTemplate {
    pub session: Session,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub session: Session,
    pub hotels: Vec<Hotel>,
    pub room_count: usize,
    pub active_bookings: usize,
    pub recent_bookings: Vec<Booking>,
}

#[derive(Template)]
#[template(path = "admin/denied.html")]
pub struct AccessDeniedTemplate {
    pub session: Session,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub session: Session,
    pub message: String,
}
