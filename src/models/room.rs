use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable room. Read-only from the booking flow's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_type_id: Uuid,
    pub name: String,
    pub room_number: String,
    pub price_per_night: Decimal,
    pub capacity: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
