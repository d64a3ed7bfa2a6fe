//! Response envelopes for the JSON endpoints.

pub mod health;
pub mod list;
