use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::traits::{KeyValueStorage, StorageError};

/// Key-value store backed by a data directory, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_directory: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            info!("Creating data directory: {}", base_path.display());
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding `key`
    pub fn value_file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain_name = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && key != "."
            && key != "..";
        if !is_plain_name {
            return Err(StorageError::Unavailable(format!(
                "key '{}' cannot be used as a file name",
                key
            )));
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.value_file_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put_value(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.value_file_path(key)?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = path.with_extension("tmp");
        if let Err(e) = write_and_replace(&temp_path, &path, value) {
            if temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    warn!("Failed to remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn delete_value(&mut self, key: &str) -> Result<bool, StorageError> {
        let path = self.value_file_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_and_replace(temp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(temp_path, path)
}
