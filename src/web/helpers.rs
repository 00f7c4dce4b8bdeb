use actix_web::HttpResponse;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use askama::Template;
use uuid::Uuid;

use super::session::SESSION_COOKIE;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(t, StatusCode::OK)
}

pub fn render_status<T: Template>(t: T, status: StatusCode) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn session_cookie(user_id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, user_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();

    cookie
}
