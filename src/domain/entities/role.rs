//! Role lookup entity.

/// The role assigned to every newly registered user.
///
/// Seeded by migrations; registration fails with
/// [`crate::error::AppError::PreconditionMissing`] if the row is gone.
pub const DEFAULT_ROLE: &str = "USER";

/// A named permission group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Role {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
