//! Front matter handling for memo files.
//!
//! A memo is written as:
//!
//! ```text
//! ---
//! layout: memo
//! title: My First Post
//! date: <creation time, DATE_FORMAT>
//! tags:
//! - memo
//! ---
//! <content>
//! ```

use super::MemoError;
use chrono::{DateTime, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Layout every memo is rendered with
pub const MEMO_LAYOUT: &str = "memo";

/// Tag every memo carries
pub const MEMO_TAG: &str = "memo";

/// `date` rendering: local time with numeric offset
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Block delimiter line
const DELIMITER: &str = "---";

/// Leading front matter block: an opening `---` line, the shortest run of
/// lines up to the next `---` line, and the whitespace that follows it.
static RE_FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?P<yaml>.*?\r?\n)??---(?:\r?\n|\z)(?P<trail>\s*)").unwrap()
});

/// Metadata header of a memo. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// Build the front matter for a new memo.
pub fn create_front_matter<Tz>(title: &str, created: &DateTime<Tz>) -> FrontMatter
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    FrontMatter {
        layout: MEMO_LAYOUT.to_owned(),
        title: title.to_owned(),
        date: created.format(DATE_FORMAT).to_string(),
        tags: vec![MEMO_TAG.to_owned()],
    }
}

/// Read a note and drop its leading front matter block, if any.
pub fn read_content_without_front_matter(path: &Path) -> Result<String, MemoError> {
    let content = fs::read_to_string(path).map_err(MemoError::io(path))?;
    Ok(strip_front_matter(&content).to_owned())
}

/// Drop a leading front matter block and the whitespace after it.
///
/// Unterminated blocks and `---` lines further down are left alone.
pub fn strip_front_matter(content: &str) -> &str {
    RE_FRONT_MATTER
        .find(content)
        .map_or(content, |m| &content[m.end()..])
}

/// Render a memo: front matter block, separator, content.
///
/// Every segment ends with a newline; `content` only gets one appended when
/// it does not already end with it.
pub fn render_memo(front_matter: &FrontMatter, content: &str) -> Result<String, MemoError> {
    let yaml = serde_yaml::to_string(front_matter)?;

    let mut out = String::with_capacity(yaml.len() + content.len() + 16);
    for segment in [DELIMITER, yaml.as_str(), DELIMITER, content] {
        out.push_str(segment);
        if !segment.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

/// Write a memo file, creating or truncating it.
///
/// Not atomic: a failure halfway leaves a partial file behind.
pub fn write_memo_file(
    path: &Path,
    front_matter: &FrontMatter,
    content: &str,
) -> Result<(), MemoError> {
    let text = render_memo(front_matter, content)?;
    fs::write(path, text).map_err(MemoError::io(path))
}

/// Split a rendered memo back into its front matter and body.
///
/// The body is returned exactly as stored, including the final newline.
#[cfg(test)]
pub fn parse_memo(text: &str) -> Option<(FrontMatter, &str)> {
    let caps = RE_FRONT_MATTER.captures(text)?;
    let yaml = caps.name("yaml").map_or("", |m| m.as_str());
    let front_matter = serde_yaml::from_str(yaml).ok()?;
    // Body starts right after the closing delimiter line
    let body_start = caps.name("trail").map_or(text.len(), |m| m.start());
    Some((front_matter, &text[body_start..]))
}
