#[macro_export]
macro_rules! log_db_error {
    // Usage: log_db_error!(&state.pool, data);
    // Records the failing call site and its parameters in error_logs
    // without blocking the request that hit the error.
    ($pool:expr, $params:expr) => {{
        let pool_clone = ::sqlx::PgPool::clone(&$pool);
        let location = concat!(file!(), ":", line!());

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::log::error!("unexpected database error at {}", location);

        ::tokio::spawn(async move {
            let _ = ::sqlx::query(
                r#"
                    INSERT INTO error_logs (location, parameters)
                    VALUES ($1, $2)
                    "#,
            )
            .bind(location)
            .bind(params_json)
            .execute(&pool_clone)
            .await;
        });
    }};
}
