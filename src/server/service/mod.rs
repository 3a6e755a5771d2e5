//! Service layer for business logic and upstream API access.
//!
//! Services coordinate repositories and external APIs: Discord sign in, user and character
//! management, parties and campaigns, the content proxy with its overrides, the SRD
//! compendium, World Anvil and the props of each page.

pub mod auth;
pub mod campaign;
pub mod character;
pub mod compendium;
pub mod content;
pub mod discord;
pub mod page;
pub mod party;
pub mod user;
pub mod world_anvil;
