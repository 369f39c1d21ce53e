//! Terminal logging with colored module prefixes.
//!
//! ```ignore
//! log!("memo"; "wrote {}", path.display());
//! log!("warn"; "{warning}");
//! ```
//!
//! Output format: `[module] message`, truncated to the terminal width.

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Fallback width when the terminal size cannot be read
const DEFAULT_WIDTH: u16 = 120;

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Display length of `[module] ` for a module name of the given length.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(DEFAULT_WIDTH))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Modules whose messages are never truncated
const UNTRUNCATED_MODULES: &[&str] = &["warn", "error"];

/// Write `[module] message` to stdout.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let message = fit_message(module, message, get_terminal_width() as usize);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Cut a single-line message to the terminal width.
///
/// Multiline messages and `warn`/`error` messages are kept whole.
fn fit_message<'a>(module: &str, message: &'a str, width: usize) -> &'a str {
    let keep_whole = message.contains('\n')
        || UNTRUNCATED_MODULES
            .iter()
            .any(|m| module.eq_ignore_ascii_case(m));
    if keep_whole {
        message
    } else {
        truncate_str(message, width.saturating_sub(calc_prefix_len(module.len())))
    }
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "warn" => prefix.bright_yellow().bold(),
        "error" => prefix.bright_red().bold(),
        "memo" => prefix.bright_green().bold(),
        _ => prefix.bright_blue().bold(),
    }
}

/// Truncate a string to at most `max_len` bytes on a char boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
