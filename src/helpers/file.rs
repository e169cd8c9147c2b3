use crate::error::RustyGridError;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// The file a table is persisted to.
///
/// Every write replaces the whole content; there is no locking, so concurrent
/// writers to the same path race and the last one wins.
#[derive(Clone, Debug)]
pub struct BackingFile {
    path: PathBuf,
}

impl BackingFile {
    /// Opens a backing file, creating it empty first when `create_if_missing` is set.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file is absent and may not be created,
    /// or when it cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, create_if_missing: bool) -> Result<Self, RustyGridError> {
        let path = path.as_ref().to_path_buf();
        if create_if_missing {
            OpenOptions::new().create(true).append(true).open(&path)?;
        } else {
            File::open(&path)?;
        }
        debug!("Opened backing file '{}'", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full text of the file.
    pub fn read_to_string(&self) -> Result<String, RustyGridError> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Replaces the full content of the file with `text`.
    pub fn overwrite(&self, text: &str) -> Result<(), RustyGridError> {
        let mut file = File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        debug!("Flushed {} bytes to '{}'", text.len(), self.path.display());
        Ok(())
    }
}
