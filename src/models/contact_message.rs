use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessageCreate {
    /// All fields are required on the form; the check mirrors that here.
    pub fn has_blank_fields(&self) -> bool {
        self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.subject.trim().is_empty()
            || self.message.trim().is_empty()
    }
}
