use actix_web::{get, web, HttpRequest, Responder};

use royalstay::db;
use royalstay::models::BookingQuery;

use crate::web::helpers::render;
use crate::web::session::Session;
use crate::web::state::AppState;
use crate::web::templates::{AccessDeniedTemplate, AdminDashboardTemplate};

const RECENT_BOOKINGS: usize = 5;

#[get("/admin")]
pub async fn admin_dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let session = Session::from_request(&req);

    let Some(admin_id) = session.user_id else {
        return render(AccessDeniedTemplate { session });
    };

    let hotels = db::list_hotels_for_admin(&state.pool, admin_id)
        .await
        .unwrap_or_default();
    let rooms = db::list_rooms_for_admin(&state.pool, admin_id)
        .await
        .unwrap_or_default();
    let bookings = db::list_bookings_for_admin(&state.pool, admin_id, &BookingQuery::default())
        .await
        .unwrap_or_default();

    let active_bookings = bookings.iter().filter(|b| b.is_active()).count();
    let recent_bookings = bookings.into_iter().take(RECENT_BOOKINGS).collect();

    render(AdminDashboardTemplate {
        session,
        room_count: rooms.len(),
        active_bookings,
        hotels,
        recent_bookings,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard);
}
