use sqlx::PgPool;
use uuid::Uuid;

use crate::common::BookingError;
use crate::db;
use crate::models::{Booking, BookingCreate, Room, RoomType};

use super::BookingDraft;

/// Assemble the insert payload for a completed wizard, or refuse. This is
/// the whole precondition surface of a reservation: an authenticated
/// user, a loaded room, and a draft that passes domain validation.
pub fn reservation_request(
    user_id: Option<Uuid>,
    room: Option<&Room>,
    draft: &BookingDraft,
) -> Result<BookingCreate, BookingError> {
    let user_id = user_id.ok_or(BookingError::Unauthenticated)?;
    let room = room.ok_or(BookingError::NoRoomSelected)?;

    draft.validate(room)?;

    Ok(BookingCreate {
        user_id,
        room_id: room.id,
        check_in_date: draft.check_in,
        check_out_date: draft.check_out,
        total_price: draft.total_price(room),
        guest_count: draft.guests,
        special_requests: draft.special_requests.clone(),
    })
}

/// Persist exactly one booking row for a completed wizard. No idempotency
/// key exists: retrying after a reported failure can duplicate a row that
/// in fact landed upstream.
pub async fn submit_reservation(
    pool: &PgPool,
    user_id: Option<Uuid>,
    room: Option<&Room>,
    draft: &BookingDraft,
) -> Result<Booking, BookingError> {
    let data = reservation_request(user_id, room, draft)?;

    match db::create_booking(pool, &data).await {
        Ok(booking) => Ok(booking),
        Err(e) => {
            crate::log_db_error!(pool, &data);
            Err(BookingError::Submission(e))
        }
    }
}

/// Load the room addressed by the flow's URL, then its room type. The
/// room-type fetch is not attempted for a room that does not exist.
pub async fn load_room_details(
    pool: &PgPool,
    room_id: Uuid,
) -> Result<(Room, RoomType), BookingError> {
    let room = db::get_room_by_id(pool, room_id)
        .await
        .map_err(BookingError::Fetch)?
        .ok_or(BookingError::RoomNotFound(room_id))?;

    let room_type = db::get_room_type_by_id(pool, room.room_type_id)
        .await
        .map_err(BookingError::Fetch)?
        .ok_or(BookingError::RoomNotFound(room_id))?;

    Ok((room, room_type))
}
