//! Path-backed inputs: plain text files, gzip files and directories.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

/// A filesystem path plus the identifier used in logs and errors.
#[derive(Debug, Clone)]
pub struct FileInput {
    id: String,
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file as buffered text.
    pub fn open_text(&self) -> io::Result<BufReader<File>> {
        Ok(BufReader::new(File::open(&self.path)?))
    }

    /// Open the file as a (possibly multi-member) gzip stream.
    pub fn open_compressed(&self) -> io::Result<BufReader<MultiGzDecoder<File>>> {
        let file = File::open(&self.path)?;
        Ok(BufReader::new(MultiGzDecoder::new(file)))
    }

    /// List the entries of a directory as full paths, sorted by file name.
    pub fn list_sorted(&self) -> io::Result<Vec<PathBuf>> {
        let mut names = std::fs::read_dir(&self.path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names.into_iter().map(|name| self.path.join(name)).collect())
    }
}
