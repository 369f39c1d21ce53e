//! Image relocation for memo content.
//!
//! Every Markdown image `![alt](path)` is resolved against the note's
//! directory, copied flat into the image directory and re-pointed there.

use super::MemoError;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Markdown image reference, capturing the path.
static RE_IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").unwrap());

/// An image reference whose source file was not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingImage {
    /// Resolved source path that was looked up
    pub path: PathBuf,
}

impl fmt::Display for MissingImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: Image file {} does not exist.", self.path.display())
    }
}

/// Result of relocating the images of one piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRewrite {
    /// Content with every resolvable reference re-pointed
    pub content: String,
    /// Destination path of each copy, in reference order
    pub copied: Vec<PathBuf>,
    /// One entry per reference that could not be resolved
    pub warnings: Vec<MissingImage>,
}

/// Copy referenced images into `dest_dir` and rewrite their references.
///
/// Each occurrence is handled on its own, so a duplicated reference is
/// copied twice. Found images are rewritten to `![<name>](<dest_dir>/<name>)`;
/// missing ones are left as written and reported in `warnings`. `dest_dir`
/// is only created once there is something to copy.
pub fn copy_images_and_update_paths(
    content: &str,
    source_dir: &Path,
    dest_dir: &Path,
) -> Result<ImageRewrite, MemoError> {
    let mut rewrite = ImageRewrite {
        content: String::with_capacity(content.len()),
        ..Default::default()
    };
    let mut last = 0;

    for caps in RE_IMAGE.captures_iter(content) {
        let (Some(whole), Some(image)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        rewrite.content.push_str(&content[last..whole.start()]);
        last = whole.end();

        match relocate(image.as_str(), source_dir, dest_dir)? {
            Relocated::Copied { name, dest } => {
                rewrite
                    .content
                    .push_str(&format!("![{name}]({})", dest.display()));
                rewrite.copied.push(dest);
            }
            Relocated::Missing(path) => {
                rewrite.content.push_str(whole.as_str());
                rewrite.warnings.push(MissingImage { path });
            }
        }
    }

    rewrite.content.push_str(&content[last..]);
    Ok(rewrite)
}

enum Relocated {
    Copied { name: String, dest: PathBuf },
    Missing(PathBuf),
}

/// Copy one referenced image, if it exists.
fn relocate(image: &str, source_dir: &Path, dest_dir: &Path) -> Result<Relocated, MemoError> {
    // Absolute-looking references are still relative to the note
    let source = source_dir.join(image.trim_start_matches('/'));

    let name = match Path::new(image).file_name() {
        Some(name) if source.is_file() => name.to_string_lossy().into_owned(),
        _ => return Ok(Relocated::Missing(source)),
    };

    fs::create_dir_all(dest_dir).map_err(MemoError::io(dest_dir))?;
    let dest = dest_dir.join(&name);
    fs::copy(&source, &dest).map_err(MemoError::io(&source))?;

    Ok(Relocated::Copied { name, dest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Note directory with `pic.png` and `sub/deep.jpg`.
    fn fixture() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("notes");
        let dest = dir.path().join("public/images");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("pic.png"), b"\x89PNG-bytes").unwrap();
        fs::write(source.join("sub/deep.jpg"), b"jpeg-bytes").unwrap();
        (dir, source, dest)
    }

    #[test]
    fn test_no_references_no_writes() {
        let (_dir, source, dest) = fixture();
        let content = "# Title\n\nJust [a link](pic.png) and text.\n";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        assert_eq!(rewrite.content, content);
        assert!(rewrite.copied.is_empty());
        assert!(rewrite.warnings.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_single_reference_copied() {
        let (_dir, source, dest) = fixture();
        let content = "before ![A cat](pic.png) after";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        let expected_dest = dest.join("pic.png");
        assert_eq!(rewrite.copied, vec![expected_dest.clone()]);
        assert_eq!(fs::read(&expected_dest).unwrap(), b"\x89PNG-bytes");
        assert_eq!(
            rewrite.content,
            format!("before ![pic.png]({}) after", expected_dest.display())
        );
        assert_ne!(rewrite.content, content);
        assert!(rewrite.warnings.is_empty());
    }

    #[test]
    fn test_nested_source_is_flattened() {
        let (_dir, source, dest) = fixture();

        let rewrite = copy_images_and_update_paths("![x](sub/deep.jpg)", &source, &dest).unwrap();

        assert!(dest.join("deep.jpg").is_file());
        assert!(!dest.join("sub").exists());
        assert_eq!(
            rewrite.content,
            format!("![deep.jpg]({})", dest.join("deep.jpg").display())
        );
    }

    #[test]
    fn test_missing_reference_kept_with_warning() {
        let (_dir, source, dest) = fixture();
        let content = "see ![gone](missing.png) here";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        assert_eq!(rewrite.content, content);
        assert_eq!(rewrite.warnings.len(), 1);
        assert_eq!(rewrite.warnings[0].path, source.join("missing.png"));
        assert!(rewrite.copied.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_image_message() {
        let warning = MissingImage {
            path: PathBuf::from("notes/missing.png"),
        };
        assert_eq!(
            warning.to_string(),
            "Warning: Image file notes/missing.png does not exist."
        );
    }

    #[test]
    fn test_duplicate_references_each_processed() {
        let (_dir, source, dest) = fixture();
        let content = "![a](pic.png)\n![b](pic.png)\n";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        let target = dest.join("pic.png");
        assert_eq!(rewrite.copied, vec![target.clone(), target.clone()]);
        let line = format!("![pic.png]({})", target.display());
        assert_eq!(rewrite.content, format!("{line}\n{line}\n"));
    }

    #[test]
    fn test_mixed_found_and_missing() {
        let (_dir, source, dest) = fixture();
        let content = "![one](pic.png) ![two](nope.gif) ![three](sub/deep.jpg)";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        assert_eq!(rewrite.copied.len(), 2);
        assert_eq!(rewrite.warnings.len(), 1);
        assert!(rewrite.content.contains("![two](nope.gif)"));
        assert!(!rewrite.content.contains("![one]"));
    }

    #[test]
    fn test_overwrites_existing_destination() {
        let (_dir, source, dest) = fixture();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("pic.png"), b"stale").unwrap();

        copy_images_and_update_paths("![p](pic.png)", &source, &dest).unwrap();

        assert_eq!(fs::read(dest.join("pic.png")).unwrap(), b"\x89PNG-bytes");
    }

    #[test]
    fn test_leading_slash_resolved_against_source_dir() {
        let (_dir, source, dest) = fixture();

        let rewrite = copy_images_and_update_paths("![p](/pic.png)", &source, &dest).unwrap();

        assert_eq!(rewrite.copied, vec![dest.join("pic.png")]);
    }

    #[test]
    fn test_directory_reference_is_missing() {
        let (_dir, source, dest) = fixture();

        let rewrite = copy_images_and_update_paths("![d](sub)", &source, &dest).unwrap();

        assert_eq!(rewrite.warnings.len(), 1);
        assert_eq!(rewrite.content, "![d](sub)");
    }

    #[test]
    fn test_reference_does_not_span_lines() {
        let (_dir, source, dest) = fixture();
        let content = "![broken\n](pic.png)";

        let rewrite = copy_images_and_update_paths(content, &source, &dest).unwrap();

        assert_eq!(rewrite.content, content);
        assert!(rewrite.copied.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let (_dir, source, dest) = fixture();
        let content = String::from("![p](pic.png)");

        let rewrite = copy_images_and_update_paths(&content, &source, &dest).unwrap();

        assert_eq!(content, "![p](pic.png)");
        assert_ne!(rewrite.content, content);
    }
}
