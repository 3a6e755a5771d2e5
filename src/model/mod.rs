//! Request and response types shared by the JSON API and the page controllers.

pub mod api;
pub mod bot;
pub mod campaign;
pub mod character;
pub mod content;
pub mod page;
pub mod party;
pub mod system;
pub mod user;
