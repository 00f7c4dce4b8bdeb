use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Hotel;

/// All hotels for the public listing, best-rated first.
pub async fn list_hotels(pool: &PgPool) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT *
        FROM hotels
        ORDER BY rating DESC, name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_hotel_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT *
        FROM hotels
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Every hotel in the signed-in admin's portfolio, not just the first.
pub async fn list_hotels_for_admin(
    pool: &PgPool,
    admin_id: Uuid,
) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT *
        FROM hotels
        WHERE admin_id = $1
        ORDER BY name
        "#,
    )
    .bind(admin_id)
    .fetch_all(pool)
    .await
}
