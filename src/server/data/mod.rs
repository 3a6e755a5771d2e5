//! Data access layer repositories.
//!
//! Each repository wraps a borrowed sea-orm connection (or transaction) and exposes the
//! queries one domain needs. Repositories return entity models, services convert them.

pub mod campaign;
pub mod character;
pub mod content_override;
pub mod party;
pub mod session_event;
pub mod user;
