//! Small helpers shared by the persistence and error layers.
//!
//! - [`db_error`] - Classification of database errors
//! - [`search`] - Building literal substring patterns for `LIKE` queries

pub mod db_error;
pub mod search;
