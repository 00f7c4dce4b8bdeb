use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use royalstay::booking::{self, BookingDraft, BookingFlow, Step};
use royalstay::common::BookingError;
use royalstay::models::{PaymentMethod, Room, RoomType};

use crate::web::helpers::{render, render_status};
use crate::web::session::Session;
use crate::web::state::AppState;
use crate::web::templates::{BookingConfirmationTemplate, BookingFlowTemplate, ErrorPageTemplate};

#[derive(serde::Deserialize)]
pub struct BookingFlowForm {
    pub step: u8,
    pub action: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub payment_method: String,
}

fn flow_page(
    session: Session,
    room: Room,
    room_type: RoomType,
    flow: &BookingFlow,
    draft: BookingDraft,
    error: Option<String>,
) -> HttpResponse {
    let nights = draft.nights();
    let total = draft.total_price(&room).to_string();

    render(BookingFlowTemplate {
        session,
        step: flow.step(),
        room,
        room_type,
        draft,
        error,
        today: Utc::now().date_naive().to_string(),
        nights,
        total,
    })
}

fn load_error_page(session: Session, err: BookingError) -> HttpResponse {
    match err {
        BookingError::RoomNotFound(_) => render_status(
            ErrorPageTemplate {
                session,
                message: "Room not found".to_string(),
            },
            StatusCode::NOT_FOUND,
        ),
        _ => render_status(
            ErrorPageTemplate {
                session,
                message: "Failed to load room details".to_string(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}

/// What the guest reads when confirmation fails. Backend detail stays in
/// the logs; retryable wording only where a retry can help.
fn submission_error_message(err: &BookingError) -> String {
    match err {
        BookingError::Submission(_) => {
            "Failed to create booking. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}

#[get("/booking/confirmation")]
pub async fn booking_confirmation(req: HttpRequest) -> impl Responder {
    render(BookingConfirmationTemplate {
        session: Session::from_request(&req),
    })
}

#[get("/booking/{room_id}")]
pub async fn booking_start(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let session = Session::from_request(&req);
    let room_id = path.into_inner();

    match booking::load_room_details(&state.pool, room_id).await {
        Ok((room, room_type)) => {
            let draft = BookingDraft::starting(Utc::now().date_naive());
            flow_page(session, room, room_type, &BookingFlow::new(), draft, None)
        }
        Err(e) => load_error_page(session, e),
    }
}

#[post("/booking/{room_id}")]
pub async fn booking_step(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<BookingFlowForm>,
) -> impl Responder {
    let session = Session::from_request(&req);
    let room_id = path.into_inner();

    let (room, room_type) = match booking::load_room_details(&state.pool, room_id).await {
        Ok(pair) => pair,
        Err(e) => return load_error_page(session, e),
    };

    let Some(step) = Step::from_number(form.step) else {
        return HttpResponse::BadRequest().body("Invalid step");
    };

    let payment_method = match form.payment_method.parse::<PaymentMethod>() {
        Ok(m) => m,
        Err(_) => return HttpResponse::BadRequest().body("Invalid payment method"),
    };

    let draft = BookingDraft {
        check_in: form.check_in,
        check_out: form.check_out,
        guests: form.guests,
        special_requests: form.special_requests.clone().unwrap_or_default(),
        payment_method,
    };

    let mut flow = BookingFlow::at_step(step);

    match form.action.as_str() {
        "back" => {
            flow.retreat();
            flow_page(session, room, room_type, &flow, draft, None)
        }
        "continue" => {
            flow.advance();
            flow_page(session, room, room_type, &flow, draft, None)
        }
        "confirm" => {
            let ticket = match flow.begin_submission() {
                Ok(t) => t,
                Err(e) => {
                    let message = submission_error_message(&e);
                    return flow_page(session, room, room_type, &flow, draft, Some(message));
                }
            };

            let result =
                booking::submit_reservation(&state.pool, session.user_id, Some(&room), &draft)
                    .await;
            flow.finish_submission(ticket);

            match result {
                Ok(_) => HttpResponse::SeeOther()
                    .insert_header(("Location", "/booking/confirmation"))
                    .finish(),
                Err(e) => {
                    let message = submission_error_message(&e);
                    flow_page(session, room, room_type, &flow, draft, Some(message))
                }
            }
        }
        _ => HttpResponse::BadRequest().body("Unknown action"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // The confirmation route must come first so that path segment is not
    // read as a room id.
    cfg.service(booking_confirmation)
        .service(booking_start)
        .service(booking_step);
}
