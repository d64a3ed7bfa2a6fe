//! Club entity.

use chrono::{DateTime, Utc};

/// A running club listed in the directory.
///
/// `title` is used for lookups but is not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i64,
    pub title: String,
    pub photo_url: String,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Club {
    /// Creates a new Club instance.
    pub fn new(
        id: i64,
        title: String,
        photo_url: String,
        content: String,
        created_on: DateTime<Utc>,
        updated_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            photo_url,
            content,
            created_on,
            updated_on,
        }
    }
}

/// Input data for creating a club. Timestamps are set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClub {
    pub title: String,
    pub photo_url: String,
    pub content: String,
}

/// Replacement values for an existing club's editable fields.
///
/// The id and `created_on` are never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubChanges {
    pub title: String,
    pub photo_url: String,
    pub content: String,
}
