//! HTTP request handlers for JSON endpoints.

pub mod clubs;
pub mod events;
pub mod health;

pub use clubs::{club_handler, club_list_handler};
pub use events::{event_handler, event_list_handler};
pub use health::health_handler;
