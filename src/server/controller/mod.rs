//! HTTP controller endpoints for the Crit Fumble web API.
//!
//! Controllers extract the request, resolve the signed in user, call into the service layer
//! and shape the response. Page controllers return the props a view needs as JSON and send
//! unauthenticated visitors to sign in, API controllers answer 401 instead.

pub mod account;
pub mod admin;
pub mod auth;
pub mod campaign;
pub mod character;
pub mod page;
pub mod party;
pub mod proxy;
pub mod system;
pub mod user;
pub mod util;
pub mod world_anvil;
