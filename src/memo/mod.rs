//! Memo conversion primitives.
//!
//! | Module          | Purpose                                          |
//! |-----------------|--------------------------------------------------|
//! | `front_matter`  | Strip, build, write and parse memo front matter  |
//! | `images`        | Relocate Markdown image references               |
//! | `error`         | `MemoError`                                      |

mod error;
pub mod front_matter;
pub mod images;

pub use error::MemoError;
pub use front_matter::{create_front_matter, read_content_without_front_matter, write_memo_file};
pub use images::{MissingImage, copy_images_and_update_paths};
