use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::common::BookingError;
use crate::models::{Booking, BookingCreate, BookingQuery};

/// Insert the single row a completed wizard produces. Both lifecycle
/// columns start at 'pending'; later transitions happen outside the site.
pub async fn create_booking(pool: &PgPool, data: &BookingCreate) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings
            (user_id, room_id, check_in_date, check_out_date,
             total_price, guest_count, special_requests, status, payment_status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', 'pending')
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.room_id)
    .bind(data.check_in_date)
    .bind(data.check_out_date)
    .bind(data.total_price)
    .bind(data.guest_count)
    .bind(&data.special_requests)
    .fetch_one(pool)
    .await
}

/// Bookings across every room of every hotel the admin owns, with
/// optional column filters, pagination and sorting. Newest first unless
/// the query says otherwise.
pub async fn list_bookings_for_admin(
    pool: &PgPool,
    admin_id: Uuid,
    data: &BookingQuery,
) -> Result<Vec<Booking>, BookingError> {
    if data.limit.is_some_and(|limit| limit < 0) {
        return Err(BookingError::InvalidRequest(
            "Pagination 'limit' is negative integer".into(),
        ));
    }

    if data.offset.is_some_and(|offset| offset < 0) {
        return Err(BookingError::InvalidRequest(
            "Pagination 'offset' is negative integer".into(),
        ));
    }

    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT b.*
        FROM bookings b
        JOIN rooms r ON r.id = b.room_id
        JOIN hotels h ON h.id = r.hotel_id
        WHERE "#,
    );
    let mut separated = query_builder.separated(" AND ");

    separated
        .push("h.admin_id = ")
        .push_bind_unseparated(admin_id);

    if let Some(id) = data.id {
        separated.push("b.id = ").push_bind_unseparated(id);
    }

    if let Some(user_id) = data.user_id {
        separated
            .push("b.user_id = ")
            .push_bind_unseparated(user_id);
    }

    if let Some(room_id) = data.room_id {
        separated
            .push("b.room_id = ")
            .push_bind_unseparated(room_id);
    }

    if let Some(status) = data.status {
        separated
            .push("b.status = ")
            .push_bind_unseparated(status.as_str());
    }

    if let Some(created_at) = &data.created_at {
        separated
            .push("b.created_at >= ")
            .push_bind_unseparated(created_at);
    }

    if let Some(sort_params) = &data.sort_by {
        // Pagination fields carry no sort direction.
        if sort_params.len() > BookingQuery::fields().len().saturating_sub(3) {
            return Err(BookingError::InvalidRequest(format!(
                "Sort parameters exceed maximum limit of {}.",
                BookingQuery::fields().len().saturating_sub(3)
            )));
        }

        let active_sorts: Vec<_> = BookingQuery::fields()
            .iter()
            .zip(sort_params.iter())
            .filter_map(|(&col, &dir)| dir.map(|is_asc| (col, is_asc)))
            .collect();

        if active_sorts.is_empty() {
            query_builder.push(" ORDER BY b.created_at DESC ");
        } else {
            query_builder.push(" ORDER BY ");
            let mut separator = query_builder.separated(", ");

            for (col_name, is_asc) in active_sorts {
                let direction = if is_asc { "ASC" } else { "DESC" };
                separator.push(format!("b.{} {}", col_name, direction));
            }
        }
    } else {
        query_builder.push(" ORDER BY b.created_at DESC ");
    }

    if let Some(offset) = &data.offset {
        query_builder.push(" OFFSET ").push_bind(offset);
    }

    if let Some(limit) = &data.limit {
        query_builder.push(" LIMIT ").push_bind(limit);
    }

    let bookings = query_builder
        .build_query_as::<Booking>()
        .fetch_all(pool)
        .await
        .map_err(BookingError::Fetch)?;

    Ok(bookings)
}
