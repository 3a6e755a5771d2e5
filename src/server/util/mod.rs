//! Utility functions shared by services, controllers and cron jobs.

pub mod slug;
pub mod time;
