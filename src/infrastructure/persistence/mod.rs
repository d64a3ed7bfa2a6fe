//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Rows are
//! decoded into private `*Row` structs and converted into domain entities at
//! this boundary.
//!
//! - [`PgClubRepository`] - Club storage, lookup and search
//! - [`PgEventRepository`] - Event storage and listing
//! - [`PgRoleRepository`] - Role lookup table
//! - [`PgUserRepository`] - User registration with role associations

pub mod pg_club_repository;
pub mod pg_event_repository;
pub mod pg_role_repository;
pub mod pg_user_repository;

pub use pg_club_repository::PgClubRepository;
pub use pg_event_repository::PgEventRepository;
pub use pg_role_repository::PgRoleRepository;
pub use pg_user_repository::PgUserRepository;
