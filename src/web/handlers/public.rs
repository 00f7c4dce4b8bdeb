use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use royalstay::db;

use crate::web::helpers::{render, render_status};
use crate::web::session::Session;
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, ErrorPageTemplate, HomeTemplate, HotelDetailsTemplate, HotelsTemplate,
};

#[get("/")]
pub async fn home(req: HttpRequest) -> impl Responder {
    render(HomeTemplate {
        session: Session::from_request(&req),
    })
}

#[derive(serde::Deserialize)]
pub struct HotelSearch {
    pub q: Option<String>,
}

#[get("/hotels")]
pub async fn hotels(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<HotelSearch>,
) -> impl Responder {
    let session = Session::from_request(&req);
    let search = query.q.clone().unwrap_or_default();

    let hotels = db::list_hotels(&state.pool).await.unwrap_or_default();
    let hotels = hotels
        .into_iter()
        .filter(|h| h.matches_search(&search))
        .collect();

    render(HotelsTemplate {
        session,
        hotels,
        search,
    })
}

#[get("/hotels/{id}")]
pub async fn hotel_details(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let session = Session::from_request(&req);
    let id = path.into_inner();

    let hotel = match db::get_hotel_by_id(&state.pool, id).await {
        Ok(Some(h)) => h,
        Ok(None) => {
            return render_status(
                ErrorPageTemplate {
                    session,
                    message: "Hotel not found".to_string(),
                },
                StatusCode::NOT_FOUND,
            );
        }
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Database error: {e}"));
        }
    };

    let rooms = db::list_rooms_for_hotel(&state.pool, id)
        .await
        .unwrap_or_default();

    render(HotelDetailsTemplate {
        session,
        hotel,
        rooms,
    })
}

#[get("/about")]
pub async fn about(req: HttpRequest) -> impl Responder {
    render(AboutTemplate {
        session: Session::from_request(&req),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(hotels)
        .service(hotel_details)
        .service(about);
}
