//! Database entities for Crit Fumble.
//!
//! Each module is a SeaORM entity definition mirroring one table created by the
//! `migration` crate.

pub mod prelude;

pub mod campaign;
pub mod character;
pub mod content_override;
pub mod party;
pub mod party_campaign;
pub mod party_character;
pub mod session_event;
pub mod user;
