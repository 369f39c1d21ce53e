//! Title extraction from dated note file names.
//!
//! Notes are named `<date>-<words>.<ext>`, e.g. `2024-01-15-my_first-post.md`.

use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Leading `YYYY-MM-DD-` date prefix.
static RE_ISO_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-").unwrap());

/// Derive a human title from a note file name.
///
/// The directory and extension are dropped, then the date prefix. An ISO
/// `YYYY-MM-DD-` prefix is removed as a whole; any other name is split on
/// `-` into at most three parts and only the last one is kept. Underscores
/// and hyphens become spaces and every word is capitalized.
///
/// Never fails: names that do not follow the convention produce whatever
/// words are left.
pub fn extract_title_from_filename(filename: impl AsRef<Path>) -> String {
    let stem = file_stem(filename.as_ref());

    let words = match RE_ISO_DATE_PREFIX.find(&stem) {
        Some(prefix) => &stem[prefix.end()..],
        None => stem.splitn(3, '-').last().unwrap_or_default(),
    };

    words
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Return the ISO date prefix of a note file name, if it names a real date.
///
/// `2024-01-15-post.md` → `Some("2024-01-15")`, `2024-13-40-post.md` → `None`.
pub fn date_prefix(filename: &Path) -> Option<String> {
    let stem = file_stem(filename);
    let date = RE_ISO_DATE_PREFIX.captures(&stem)?.get(1)?.as_str();
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(date.to_owned())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
