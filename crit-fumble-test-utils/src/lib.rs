//! Test harness shared by the unit tests and the integration tests.
//!
//! [`TestBuilder`] declares the tables and mock upstream endpoints a test needs, and
//! `build()` returns a [`TestContext`] holding an in-memory SQLite database, an in-memory
//! session and the `mockito` server every upstream URL points at.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::*, TestBuilder, TestContext, TestError};
}
