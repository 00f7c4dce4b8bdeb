use chrono::{DateTime, NaiveDate, Utc};
use field_names::FieldNames;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{BookingStatus, PaymentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub guest_count: i32,
    pub special_requests: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub guest_count: i32,
    pub special_requests: String,
}

#[derive(Debug, FieldNames, Default)]
#[field_names(vis = "pub")]
pub struct BookingQuery {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
    pub created_at: Option<DateTime<Utc>>,
    //------------------------------------
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<Vec<Option<bool>>>,
}

impl Booking {
    /// Abbreviated id for table displays.
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }
}

impl BookingQuery {
    pub fn fields() -> &'static [&'static str] {
        &Self::FIELDS
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                id: None,
                user_id: None,
                room_id: None,
                status: None,
                created_at: None,
                ..
            }
        )
    }
}
