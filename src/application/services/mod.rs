//! Business logic services for the application layer.

pub mod club_service;
pub mod event_service;
pub mod password;
pub mod user_service;

pub use club_service::ClubService;
pub use event_service::EventService;
pub use user_service::UserService;
