//! Event entity.

use chrono::{DateTime, NaiveDateTime, Utc};

/// An event organised by a club.
///
/// `start_time`/`end_time` are wall-clock times as entered by the organiser,
/// so they carry no time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub club_id: i64,
    pub name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub event_type: String,
    pub photo_url: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Event {
    /// Creates a new Event instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        club_id: i64,
        name: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        event_type: String,
        photo_url: String,
        created_on: DateTime<Utc>,
        updated_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            club_id,
            name,
            start_time,
            end_time,
            event_type,
            photo_url,
            created_on,
            updated_on,
        }
    }
}

/// Input data for creating an event under an existing club.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub club_id: i64,
    pub name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub event_type: String,
    pub photo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_event_creation() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(11, 30, 0)
            .unwrap();
        let now = Utc::now();

        let event = Event::new(
            3,
            1,
            "Spring 10K".to_string(),
            start,
            end,
            "Race".to_string(),
            "https://img.example.com/10k.png".to_string(),
            now,
            now,
        );

        assert_eq!(event.club_id, 1);
        assert_eq!(event.event_type, "Race");
        assert!(event.end_time > event.start_time);
    }
}
