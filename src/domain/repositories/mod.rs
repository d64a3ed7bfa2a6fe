//! Repository trait definitions for the domain layer.
//!
//! One trait per persisted entity. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`ClubRepository`] - Club CRUD and title search
//! - [`EventRepository`] - Event creation and listing
//! - [`RoleRepository`] - Role lookup data
//! - [`UserRepository`] - User registration and lookup
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod club_repository;
pub mod event_repository;
pub mod role_repository;
pub mod user_repository;

pub use club_repository::ClubRepository;
pub use event_repository::EventRepository;
pub use role_repository::RoleRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use club_repository::MockClubRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
