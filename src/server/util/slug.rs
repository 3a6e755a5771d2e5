//! URL slug generation.

/// Converts `input` into a URL slug.
///
/// ASCII letters are lowercased, ASCII digits and `_` are kept, and every run of whitespace or
/// hyphens becomes a single hyphen. Any other character is removed. Leading and trailing
/// hyphens are trimmed, so the result may be empty when the input has no word characters.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// Returns `base` with a numeric suffix appended for the `attempt`th collision.
///
/// The first attempt is the bare slug, then `-2`, `-3`, ...
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
