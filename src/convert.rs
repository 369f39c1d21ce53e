//! Single note conversion.
//!
//! ```text
//! convert_note()
//!     │
//!     ├── extract_title_from_filename()  ──► title
//!     ├── memo_path()                    ──► fails early on an empty slug
//!     ├── read_content_without_front_matter()
//!     ├── copy_images_and_update_paths() ──► images copied, warnings
//!     ├── create_front_matter()          ──► note creation time
//!     └── write_memo_file()              ──► <output>/<date>-<slug>.md
//! ```

use crate::{
    log,
    memo::{
        MemoError, MissingImage, copy_images_and_update_paths, create_front_matter,
        read_content_without_front_matter, write_memo_file,
    },
    utils::{
        slug::slugify,
        title::{date_prefix, extract_title_from_filename},
    },
};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// Memo file extension
const MEMO_EXT: &str = "md";

/// Where a note goes and how it is titled.
#[derive(Debug, Clone)]
pub struct ConvertOptions<'a> {
    /// Source note file
    pub note: &'a Path,
    /// Directory memo files are written to
    pub output: &'a Path,
    /// Directory referenced images are copied to
    pub images: &'a Path,
    /// Title to use instead of the one derived from the file name
    pub title: Option<&'a str>,
}

/// What a conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub memo_path: PathBuf,
    pub title: String,
    pub copied_images: Vec<PathBuf>,
    pub warnings: Vec<MissingImage>,
}

/// Convert one note into a memo.
pub fn convert_note(opts: &ConvertOptions<'_>) -> Result<ConvertReport> {
    let note = opts.note;
    let title = opts
        .title
        .map_or_else(|| extract_title_from_filename(note), str::to_owned);
    let memo_path = memo_path(note, &title, opts.output)?;

    let content = read_content_without_front_matter(note)
        .with_context(|| format!("Failed to read note {}", note.display()))?;

    let source_dir = note.parent().unwrap_or(Path::new(""));
    let rewrite = copy_images_and_update_paths(&content, source_dir, opts.images)
        .context("Failed to copy images")?;

    for image in &rewrite.copied {
        log!("image"; "{}", image.display());
    }
    for warning in &rewrite.warnings {
        log!("warn"; "{warning}");
    }

    let front_matter = create_front_matter(&title, &creation_time(note)?);

    fs::create_dir_all(opts.output)
        .with_context(|| format!("Failed to create {}", opts.output.display()))?;
    write_memo_file(&memo_path, &front_matter, &rewrite.content)?;

    Ok(ConvertReport {
        memo_path,
        title,
        copied_images: rewrite.copied,
        warnings: rewrite.warnings,
    })
}

/// Output path: `<output>/<date>-<slug>.md`, or `<output>/<slug>.md`
/// when the note name carries no date.
fn memo_path(note: &Path, title: &str, output: &Path) -> Result<PathBuf, MemoError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(MemoError::EmptySlug(note.to_path_buf()));
    }

    let stem = match date_prefix(note) {
        Some(date) => format!("{date}-{slug}"),
        None => slug,
    };
    Ok(output.join(stem).with_extension(MEMO_EXT))
}

/// Note creation time, or its modification time where the platform has no
/// birth time.
fn creation_time(note: &Path) -> Result<DateTime<Local>, MemoError> {
    let meta = fs::metadata(note).map_err(MemoError::io(note))?;
    let time: SystemTime = meta
        .created()
        .or_else(|_| meta.modified())
        .map_err(MemoError::io(note))?;
    Ok(time.into())
}
