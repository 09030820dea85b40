//! Configuration for loaders.
//!
//! This module provides:
//! - `LoaderConfig`: Options controlling directory traversal
//! - `EntryFilter`: A caller-supplied inclusion predicate

mod filter;
mod options;

pub use filter::EntryFilter;
pub use options::LoaderConfig;
