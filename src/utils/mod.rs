//! Utility modules for memo conversion.

pub mod slug;
pub mod title;
