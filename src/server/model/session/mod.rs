//! Type-safe wrappers around the values stored in the user's session.

pub mod auth;
pub mod user;
