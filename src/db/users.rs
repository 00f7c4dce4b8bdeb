use sqlx::PgPool;
use uuid::Uuid;

use crate::common::AuthError;
use crate::models::{User, UserCreate};

pub async fn add_user(pool: &PgPool, data: &UserCreate) -> Result<User, AuthError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash) VALUES ($1, $2)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.email)
    .bind(&data.password_hash)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(u) => Ok(u),
        None => Err(AuthError::EmailTaken(data.email.clone())),
    }
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT *
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT *
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
