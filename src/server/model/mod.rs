//! Server-side models: application state, OAuth types and session wrappers.

pub mod app;
pub mod auth;
pub mod session;
