use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::BookingError;
use crate::models::{PaymentMethod, Room};

/// A user's in-progress reservation selection. Lives only for the
/// duration of the flow; replaced by the persisted `Booking` on success
/// and discarded on navigation away.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub special_requests: String,
    pub payment_method: PaymentMethod,
}

impl BookingDraft {
    /// Starting selection: a one-night stay beginning tomorrow, two guests,
    /// card payment.
    pub fn starting(today: NaiveDate) -> Self {
        let check_in = today + Days::new(1);

        Self {
            check_in,
            check_out: check_in + Days::new(1),
            guests: 2,
            special_requests: String::new(),
            payment_method: PaymentMethod::Card,
        }
    }

    /// Calendar nights between check-in and check-out. Positive exactly
    /// when the range describes a meaningful stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Domain-boundary validation. Date pickers constrain their inputs with
    /// `min` attributes, but an inverted range or out-of-range guest count
    /// is rejected here regardless of what the form allowed through.
    pub fn validate(&self, room: &Room) -> Result<(), BookingError> {
        if self.check_out <= self.check_in {
            return Err(BookingError::InvalidStay);
        }

        if self.guests < 1 || self.guests > room.capacity {
            return Err(BookingError::GuestCount {
                requested: self.guests,
                capacity: room.capacity,
            });
        }

        Ok(())
    }

    /// Nightly rate times nights. Meaningful only for a draft that passes
    /// [`validate`](Self::validate); an inverted range yields a zero or
    /// negative amount, which the submission path never reaches.
    pub fn total_price(&self, room: &Room) -> Decimal {
        room.price_per_night * Decimal::from(self.nights())
    }
}
