//! Application layer: transfer objects and the services that use them.
//!
//! Services consume repository traits, validate DTOs before any write, and
//! translate between entities and DTOs so handlers never see entities.
//!
//! - [`dto`] - Form/view shapes ([`dto::ClubDto`], [`dto::EventDto`], [`dto::RegistrationDto`])
//! - [`services::club_service::ClubService`] - Club CRUD and search
//! - [`services::event_service::EventService`] - Event creation and listing
//! - [`services::user_service::UserService`] - Registration with default role
//! - [`services::password`] - Argon2 credential hashing

pub mod dto;
pub mod services;
