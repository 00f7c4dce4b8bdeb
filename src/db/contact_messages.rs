use sqlx::PgPool;

use crate::models::{ContactMessage, ContactMessageCreate};

pub async fn create_contact_message(
    pool: &PgPool,
    data: &ContactMessageCreate,
) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, subject, message)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.subject)
    .bind(&data.message)
    .fetch_one(pool)
    .await
}
