use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: i16,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Case-insensitive substring match over name and location,
    /// the same filter the search box applies to the listing.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }

    pub fn stars(&self) -> String {
        "★".repeat(self.rating.max(0) as usize)
    }
}
