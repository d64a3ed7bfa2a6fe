//! DTO for events.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Event, NewEvent};
use crate::error::AppError;

/// Format produced by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Event shape used by forms, templates and the JSON API.
///
/// Carries no club reference: the owning club comes from the request path.
/// The `event_type` field is named `type` on the wire. Times are kept as
/// submitted so that a malformed value is reported next to its field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EventDto {
    #[serde(skip_deserializing)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Start time is required"),
        custom(
            function = "validate_datetime_local",
            message = "Start time must be YYYY-MM-DDTHH:MM"
        )
    )]
    pub start_time: String,

    #[validate(
        length(min = 1, message = "End time is required"),
        custom(
            function = "validate_datetime_local",
            message = "End time must be YYYY-MM-DDTHH:MM"
        )
    )]
    pub end_time: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Event type is required"))]
    pub event_type: String,

    #[validate(length(min = 1, message = "Photo Link is required"))]
    pub photo_url: String,

    #[serde(skip_deserializing)]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_deserializing)]
    pub updated_on: Option<DateTime<Utc>>,
}

impl EventDto {
    /// Input for inserting this event under `club_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a time is missing or malformed; call
    /// [`Validate::validate`] first to get the per-field messages.
    pub fn into_new_event(self, club_id: i64) -> Result<NewEvent, AppError> {
        let (Some(start_time), Some(end_time)) = (
            parse_datetime_local(&self.start_time),
            parse_datetime_local(&self.end_time),
        ) else {
            return Err(AppError::bad_request(
                "Event times are invalid",
                json!({ "fields": { "start_time": ["Start time must be YYYY-MM-DDTHH:MM"] } }),
            ));
        };

        Ok(NewEvent {
            club_id,
            name: self.name,
            start_time,
            end_time,
            event_type: self.event_type,
            photo_url: self.photo_url,
        })
    }

    /// Start time as a `datetime-local` input value.
    pub fn start_time_input(&self) -> &str {
        &self.start_time
    }

    /// End time as a `datetime-local` input value.
    pub fn end_time_input(&self) -> &str {
        &self.end_time
    }
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: Some(event.id),
            name: event.name,
            start_time: event.start_time.format(DATETIME_LOCAL_FORMAT).to_string(),
            end_time: event.end_time.format(DATETIME_LOCAL_FORMAT).to_string(),
            event_type: event.event_type,
            photo_url: event.photo_url,
            created_on: Some(event.created_on),
            updated_on: Some(event.updated_on),
        }
    }
}

const ACCEPTED_FORMATS: [&str; 3] = [
    DATETIME_LOCAL_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a `datetime-local` value; seconds are optional.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
}

// Empty input is left to the `length` rule.
fn validate_datetime_local(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || parse_datetime_local(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("datetime_local"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_deserialize_datetime_local_values() {
        let dto: EventDto = serde_json::from_value(json!({
            "name": "Parkrun",
            "type": "Social",
            "photo_url": "https://img.example.com/park.png",
            "start_time": "2024-06-15T09:00",
            "end_time": "2024-06-15T10:30:00"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.event_type, "Social");

        let new_event = dto.into_new_event(1).unwrap();
        assert_eq!(new_event.start_time, at(9, 0));
        assert_eq!(new_event.end_time, at(10, 30));
    }

    #[test]
    fn test_blank_times_fail_validation() {
        let dto: EventDto = serde_json::from_value(json!({
            "name": "Parkrun",
            "type": "Social",
            "photo_url": "https://img.example.com/park.png",
            "start_time": ""
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["start_time"].len(), 1);
        assert!(fields.contains_key("end_time"));
    }

    #[test]
    fn test_malformed_time_is_a_field_error() {
        let dto: EventDto = serde_json::from_value(json!({
            "name": "Parkrun",
            "type": "Social",
            "photo_url": "https://img.example.com/park.png",
            "start_time": "09/01/2024 9:00 AM",
            "end_time": "2024-06-15T10:30"
        }))
        .unwrap();

        let err = AppError::from(dto.validate().unwrap_err());

        assert_eq!(
            err.details()["fields"]["start_time"][0],
            "Start time must be YYYY-MM-DDTHH:MM"
        );
        assert!(err.details()["fields"].get("end_time").is_none());
    }

    #[test]
    fn test_into_new_event_sets_club() {
        let dto = EventDto {
            name: "Relay".to_string(),
            start_time: "2024-06-15T08:00".to_string(),
            end_time: "2024-06-15T12:00".to_string(),
            event_type: "Race".to_string(),
            photo_url: "https://img.example.com/relay.png".to_string(),
            ..Default::default()
        };

        let new_event = dto.into_new_event(42).unwrap();

        assert_eq!(new_event.club_id, 42);
        assert_eq!(new_event.start_time, at(8, 0));
        assert_eq!(new_event.event_type, "Race");
    }

    #[test]
    fn test_into_new_event_without_times_fails() {
        let result = EventDto::default().into_new_event(1);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_from_entity_formats_times() {
        let now = Utc::now();
        let event = Event::new(
            3,
            1,
            "Tempo".to_string(),
            at(7, 5),
            at(8, 0),
            "Training".to_string(),
            "https://img.example.com/t.png".to_string(),
            now,
            now,
        );

        let dto = EventDto::from(event);

        assert_eq!(dto.start_time_input(), "2024-06-15T07:05");
        assert_eq!(dto.end_time_input(), "2024-06-15T08:00");
    }

    #[test]
    fn test_serializes_type_field() {
        let value = serde_json::to_value(EventDto {
            event_type: "Race".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(value["type"], "Race");
        assert!(value.get("event_type").is_none());
    }
}
