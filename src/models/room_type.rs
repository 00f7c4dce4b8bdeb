use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category record carrying descriptive metadata for a room.
/// Fetched alongside the room itself; never written by the site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
