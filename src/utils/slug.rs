//! URL slugification.
//!
//! Converts memo titles to the lowercase, hyphen-delimited form used in
//! output file names.

// ============================================================================
// Slugification
// ============================================================================

/// Convert a title to a slug.
///
/// Lowercases, trims, turns spaces into hyphens and then drops every
/// character outside `[A-Za-z0-9_-]`. Non-ASCII letters are dropped, not
/// transliterated.
///
/// | Input | Slug |
/// |-------|------|
/// | `Hello World!` | `hello-world` |
/// | `  Già--Fatto  ` | `gi--fatto` |
/// | `???` | `` |
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .trim()
        .replace(' ', "-")
        .chars()
        .filter(|&c| is_slug_char(c))
        .collect()
}

#[inline]
const fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
