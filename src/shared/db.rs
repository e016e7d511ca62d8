use sea_orm::DbErr;

/// Postgres reports unique violations as SQLSTATE 23505.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

/// SQLSTATE 23503: the row is still referenced by a `RESTRICT` foreign key.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("23503") || message.contains("violates foreign key constraint")
}
