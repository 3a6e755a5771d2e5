//! Server application core modules.
//!
//! This module contains the backend for Crit Fumble: HTTP routing, Discord sign in, the
//! content proxy with its local overrides, database access, the World Anvil integration and
//! the Discord bot's scheduled jobs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod content;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
