use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Room, RoomType};

pub async fn get_room_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT *
        FROM rooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_rooms_for_hotel(
    pool: &PgPool,
    hotel_id: Uuid,
) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT *
        FROM rooms
        WHERE hotel_id = $1
        ORDER BY room_number
        "#,
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await
}

/// Rooms across the whole of an admin's portfolio.
pub async fn list_rooms_for_admin(
    pool: &PgPool,
    admin_id: Uuid,
) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT r.*
        FROM rooms r
        JOIN hotels h ON h.id = r.hotel_id
        WHERE h.admin_id = $1
        ORDER BY r.room_number
        "#,
    )
    .bind(admin_id)
    .fetch_all(pool)
    .await
}

pub async fn get_room_type_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<RoomType>, sqlx::Error> {
    sqlx::query_as::<_, RoomType>(
        r#"
        SELECT *
        FROM room_types
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
