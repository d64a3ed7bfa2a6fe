//! Core domain entities representing the persisted data model.
//!
//! Entities are plain data structures without business logic. Each one is
//! paired with input structs describing what a caller may write:
//!
//! - [`Club`] - created from [`NewClub`], edited with [`ClubChanges`]
//! - [`Event`] - created from [`NewEvent`], always owned by one club
//! - [`Role`] - fixed lookup data seeded by migrations
//! - [`UserEntity`] - created from [`NewUser`] with its role set

pub mod club;
pub mod event;
pub mod role;
pub mod user;

pub use club::{Club, ClubChanges, NewClub};
pub use event::{Event, NewEvent};
pub use role::{DEFAULT_ROLE, Role};
pub use user::{NewUser, UserEntity};
