//! Slug derivation for games and catalog entries.
//!
//! A slug is the lowercase, hyphen-separated ASCII form of a display name. It
//! is used as the public identifier in every `/games/{slug}` and
//! `/catalog/{kind}/{slug}` route.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Derives a URL-safe slug from a display name.
///
/// The name is decomposed (NFKD) so accented letters lose their marks, `&` is
/// spelled out as `and`, apostrophes vanish without leaving a separator, and
/// every other run of non-alphanumeric characters collapses into a single `-`.
/// Leading and trailing separators are never emitted.
///
/// The result is empty when the name has no ASCII letter or digit left after
/// normalization; callers reject such names.
///
/// # Arguments
/// - `name` - Display name to convert
///
/// # Returns
/// - `String` - The derived slug, possibly empty
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.replace('&', " and ").nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if is_combining_mark(c) || c == '\'' || c == '\u{2019}' {
            continue;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Returns true when `value` is already in canonical slug form.
pub fn is_slug(value: &str) -> bool {
    !value.is_empty() && slugify(value) == value
}
