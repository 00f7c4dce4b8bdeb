use actix_web::{get, post, web, HttpRequest, Responder};

use royalstay::db;
use royalstay::models::ContactMessageCreate;

use crate::web::helpers::render;
use crate::web::session::Session;
use crate::web::state::AppState;
use crate::web::templates::ContactTemplate;

#[get("/contact")]
pub async fn contact_form(req: HttpRequest) -> impl Responder {
    render(ContactTemplate {
        session: Session::from_request(&req),
        success: false,
        error: None,
        name: String::new(),
        email: String::new(),
        subject: String::new(),
        message: String::new(),
    })
}

#[derive(serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let session = Session::from_request(&req);

    let data = ContactMessageCreate {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        subject: form.subject.trim().to_string(),
        message: form.message.to_string(),
    };

    if data.has_blank_fields() {
        return render(ContactTemplate {
            session,
            success: false,
            error: Some("All fields are required".to_string()),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
        });
    }

    match db::create_contact_message(&state.pool, &data).await {
        // Submitted; hand back a cleared form under the success banner.
        Ok(_) => render(ContactTemplate {
            session,
            success: true,
            error: None,
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
        }),
        Err(_) => render(ContactTemplate {
            session,
            success: false,
            error: Some("Failed to send message. Please try again later.".to_string()),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
        }),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_form).service(contact_submit);
}
