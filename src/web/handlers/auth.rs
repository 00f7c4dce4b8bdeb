use actix_web::{get, post, web, HttpResponse, Responder};

use royalstay::common::AuthError;
use royalstay::db;
use royalstay::models::UserCreate;
use royalstay::services::auth::{hash_password, verify_password};

use crate::web::helpers::{removal_cookie, render, session_cookie};
use crate::web::state::AppState;
use crate::web::templates::{LoginTemplate, RegisterTemplate};

#[derive(serde::Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(serde::Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

#[get("/login")]
pub async fn login_form() -> impl Responder {
    render(LoginTemplate {
        session: Default::default(),
        error: None,
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    if email.is_empty() || password.is_empty() {
        return HttpResponse::BadRequest().body("Missing email/password");
    }

    let user = match db::get_user_by_email(&state.pool, &email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            return render(LoginTemplate {
                session: Default::default(),
                error: Some(AuthError::InvalidCredentials.to_string()),
            });
        }
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Database error: {e}"));
        }
    };

    let ok = match verify_password(&password, &user.password_hash) {
        Ok(v) => v,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .body(format!("Password verification error: {e}"));
        }
    };

    if !ok {
        return render(LoginTemplate {
            session: Default::default(),
            error: Some(AuthError::InvalidCredentials.to_string()),
        });
    }

    HttpResponse::SeeOther()
        .cookie(session_cookie(user.id))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[get("/register")]
pub async fn register_form() -> impl Responder {
    render(RegisterTemplate {
        session: Default::default(),
        error: None,
    })
}

#[post("/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    if email.is_empty() || password.len() < 4 {
        return render(RegisterTemplate {
            session: Default::default(),
            error: Some(
                "Email required and password must be at least 4 characters".to_string(),
            ),
        });
    }

    let password_hash = match hash_password(&password) {
        Ok(h) => h,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .body(format!("Password hashing error: {e}"));
        }
    };

    let data = UserCreate {
        email,
        password_hash,
    };

    let user = match db::add_user(&state.pool, &data).await {
        Ok(u) => u,
        Err(e @ AuthError::EmailTaken(_)) => {
            return render(RegisterTemplate {
                session: Default::default(),
                error: Some(e.to_string()),
            });
        }
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Database error: {e}"));
        }
    };

    HttpResponse::SeeOther()
        .cookie(session_cookie(user.id))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(logout);
}
