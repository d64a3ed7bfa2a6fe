//! Data Transfer Objects exchanged between handlers and services.
//!
//! DTOs are flat, (de)serialised with Serde from HTML forms and to JSON, and
//! validated with `validator` before any write. Each one has a single adapter
//! to and from its entity so the mapping lives in exactly one place.
//!
//! - [`ClubDto`] - Club form and view shape
//! - [`EventDto`] - Event form and view shape (no club reference)
//! - [`RegistrationDto`] - Sign-up form

pub mod club;
pub mod event;
pub mod registration;

pub use club::ClubDto;
pub use event::EventDto;
pub use registration::RegistrationDto;
