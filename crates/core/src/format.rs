//! Display text helpers.

/// Suffixes that take `es` instead of `s` in the plural.
const SIBILANT_ENDINGS: &[&str] = &["s", "x", "z", "ch", "sh"];

/// Pluralize `word` for `count` items.
///
/// Returns `word` unchanged when `count == 1`; every other count (including
/// zero) gets the plural form.
///
/// ```
/// use sole_and_ankle_core::pluralize;
///
/// assert_eq!(pluralize("Color", 1), "Color");
/// assert_eq!(pluralize("Color", 3), "Colors");
/// assert_eq!(pluralize("Color", 0), "Colors");
/// ```
#[must_use]
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        return word.to_owned();
    }

    let lower = word.to_ascii_lowercase();
    if SIBILANT_ENDINGS.iter().any(|ending| lower.ends_with(ending)) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}
