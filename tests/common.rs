use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use royalstay::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";
const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FMT).expect("Invalid date format in test helper")
}

pub fn get_seed_hotel() -> Hotel {
    Hotel {
        id: Uuid::parse_str("10000000-0000-0000-0000-000000000001").unwrap(),
        admin_id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        name: "Taj Lake Palace".to_string(),
        location: "Udaipur, Rajasthan".to_string(),
        description: "A floating marvel on Lake Pichola.".to_string(),
        image_url: None,
        rating: 5,
        amenities: vec!["Spa".to_string(), "Pool".to_string()],
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_room_type() -> RoomType {
    RoomType {
        id: Uuid::parse_str("20000000-0000-0000-0000-000000000001").unwrap(),
        name: "Palace Room".to_string(),
        description: "Classic elegance with views over the grounds.".to_string(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

/// Room with the rate and capacity the pricing scenarios are written
/// against: 5000 per night, sleeps 4.
pub fn get_seed_room() -> Room {
    Room {
        id: Uuid::parse_str("30000000-0000-0000-0000-000000000001").unwrap(),
        hotel_id: get_seed_hotel().id,
        room_type_id: get_seed_room_type().id,
        name: "Lake View Palace Room".to_string(),
        room_number: "101".to_string(),
        price_per_night: Decimal::from(5000),
        capacity: 4,
        image_url: None,
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_booking() -> Booking {
    Booking {
        id: Uuid::parse_str("40000000-0000-0000-0000-000000000001").unwrap(),
        user_id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        room_id: get_seed_room().id,
        check_in_date: parse_date("2024-01-01"),
        check_out_date: parse_date("2024-01-04"),
        total_price: Decimal::from(15000),
        guest_count: 2,
        special_requests: String::new(),
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        created_at: parse_time("2026-01-05 13:22:56+00"),
    }
}
