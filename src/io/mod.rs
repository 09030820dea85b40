//! Input values and the filesystem handles producers read from.
//!
//! This module provides:
//! - `Input`: The opaque value handed to the loader
//! - `FileInput`: Opening text, gzip and directory paths

mod file;
mod input;

pub use file::FileInput;
pub use input::{Input, RecordIter};
