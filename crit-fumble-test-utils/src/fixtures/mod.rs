//! Database fixtures inserted directly through the entity crate.

pub mod campaign;
pub mod character;
pub mod content;
pub mod event;
pub mod party;
pub mod user;

/// Lowercases `name` and joins its words with hyphens
pub(crate) fn fixture_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
