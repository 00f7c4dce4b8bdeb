use actix_web::HttpRequest;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "rr_uid";

/// Identity resolved from the request cookie, passed explicitly into the
/// handlers that need it. Read-only everywhere below the auth handlers.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Session {
    pub user_id: Option<Uuid>,
}

impl Session {
    pub fn from_request(req: &HttpRequest) -> Self {
        let user_id = req
            .cookie(SESSION_COOKIE)
            .map(|c| c.value().trim().to_string())
            .filter(|s| !s.is_empty())
            .and_then(|s| Uuid::parse_str(&s).ok());

        Self { user_id }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}
