//! Static assets
//!
//! Locating files that should be shipped verbatim and copying them into the
//! output tree with their root-relative paths preserved.

mod copier;
mod locator;
mod pattern;

pub use copier::{CopiedFile, CopyReport, StaticFileCopier};
pub use locator::{locate, locate_excluding};
pub use pattern::StaticFilePattern;
