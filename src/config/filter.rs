//! Inclusion predicate for directory entries.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Decides whether a directory entry takes part in loading.
///
/// The predicate receives the full path of the entry. Cloning is cheap.
#[derive(Clone)]
pub struct EntryFilter(Arc<dyn Fn(&Path) -> bool + Send + Sync>);

impl EntryFilter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    pub fn accepts(&self, path: &Path) -> bool {
        (self.0)(path)
    }
}

impl fmt::Debug for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntryFilter(..)")
    }
}
