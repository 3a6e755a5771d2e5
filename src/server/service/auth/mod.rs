//! Discord OAuth2 sign in.
//!
//! `login` builds the authorize URL and CSRF state, `callback` exchanges the returned code
//! and turns the Discord profile into a local user.

pub mod callback;
pub mod login;
