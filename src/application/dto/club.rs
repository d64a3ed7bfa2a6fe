//! DTO for clubs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{Club, ClubChanges, NewClub};

/// Club shape used by forms, templates and the JSON API.
///
/// Absent form fields deserialize as empty strings so that they are reported
/// by validation rather than rejected by the form extractor. `id` and the
/// timestamps are output-only: an id in a submitted body is never used, and
/// one that is not a number reads as `None`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClubDto {
    #[serde_as(deserialize_as = "DefaultOnError<NoneAsEmptyString>")]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Club Title is needed"))]
    pub title: String,

    #[validate(length(min = 1, message = "Photo Link is required"))]
    pub photo_url: String,

    #[validate(length(min = 1, message = "Post content is required"))]
    pub content: String,

    #[serde(skip_deserializing)]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_deserializing)]
    pub updated_on: Option<DateTime<Utc>>,
}

impl ClubDto {
    /// Input for inserting this club.
    pub fn into_new_club(self) -> NewClub {
        NewClub {
            title: self.title,
            photo_url: self.photo_url,
            content: self.content,
        }
    }

    /// Replacement values for every editable field, title included.
    pub fn into_changes(self) -> ClubChanges {
        ClubChanges {
            title: self.title,
            photo_url: self.photo_url,
            content: self.content,
        }
    }
}

impl From<Club> for ClubDto {
    fn from(club: Club) -> Self {
        Self {
            id: Some(club.id),
            title: club.title,
            photo_url: club.photo_url,
            content: club.content,
            created_on: Some(club.created_on),
            updated_on: Some(club.updated_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ClubDto {
        ClubDto {
            title: "Trail Blazers".to_string(),
            photo_url: "https://img.example.com/trail.png".to_string(),
            content: "Weekend trail runs".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_are_reported_individually() {
        let dto = ClubDto::default();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields["title"][0].message.as_deref(),
            Some("Club Title is needed")
        );
        assert_eq!(
            fields["photo_url"][0].message.as_deref(),
            Some("Photo Link is required")
        );
        assert_eq!(
            fields["content"][0].message.as_deref(),
            Some("Post content is required")
        );
    }

    #[test]
    fn test_changes_include_title() {
        let changes = valid_dto().into_changes();
        assert_eq!(changes.title, "Trail Blazers");
        assert_eq!(changes.photo_url, "https://img.example.com/trail.png");
        assert_eq!(changes.content, "Weekend trail runs");
    }

    #[test]
    fn test_from_entity_copies_every_field() {
        let now = Utc::now();
        let club = Club::new(
            9,
            "Track Club".to_string(),
            "https://img.example.com/track.png".to_string(),
            "Intervals on Tuesdays".to_string(),
            now,
            now,
        );

        let dto = ClubDto::from(club);

        assert_eq!(dto.id, Some(9));
        assert_eq!(dto.title, "Track Club");
        assert_eq!(dto.created_on, Some(now));
        assert_eq!(dto.updated_on, Some(now));
    }

    #[test]
    fn test_deserialize_from_json_ignores_timestamps() {
        let dto: ClubDto = serde_json::from_value(serde_json::json!({
            "id": "",
            "title": "Hill Repeats",
            "photo_url": "https://img.example.com/hill.png",
            "content": "Hills",
            "created_on": "2020-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.title, "Hill Repeats");
        assert!(dto.created_on.is_none());
    }

    #[test]
    fn test_non_numeric_id_is_ignored() {
        let dto: ClubDto = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "title": "Hill Repeats"
        }))
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.title, "Hill Repeats");
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let dto: ClubDto = serde_json::from_value(serde_json::json!({ "title": "Only" })).unwrap();

        assert_eq!(dto.title, "Only");
        assert!(dto.photo_url.is_empty());
        assert!(dto.validate().is_err());
    }
}
