/// Returns the violated constraint name when `e` is a unique violation.
///
/// Constraint names come from the migrations (`users_username_key`,
/// `users_email_key`, `roles_name_key`).
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}

/// Returns the violated constraint name when `e` is a foreign key violation.
///
/// Raised when a referenced row (an event's club, a user's role) is removed
/// between a lookup and the insert that depends on it.
pub fn foreign_key_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_foreign_key_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}
