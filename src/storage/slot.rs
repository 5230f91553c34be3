//! Named storage slots
//!
//! A slot holds one serialized document and is always read and written whole.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::errors::{Result, SmartshortError};

pub trait StorageSlot: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, payload: &str) -> Result<()>;
    fn name(&self) -> &str;
    fn backend_name(&self) -> &'static str;
}

/// JSON document on disk
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// concurrent reader sees either the old or the new document, never a prefix.
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_fail(&self, e: impl std::fmt::Display) -> SmartshortError {
        error!("Failed to write slot file {}: {}", self.path.display(), e);
        SmartshortError::file_operation(format!(
            "Failed to write {}: {}",
            self.path.display(),
            e
        ))
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot file {} does not exist yet", self.path.display());
                Ok(None)
            }
            Err(e) => Err(SmartshortError::file_operation(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        // 同目录临时文件 + rename，保证替换是原子的
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_fail(e))?;
        tmp.write_all(payload.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.write_fail(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_fail(e.error))?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

/// In-process slot, gone when the process exits
pub struct MemorySlot {
    name: String,
    value: RwLock<Option<String>>,
}

impl MemorySlot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: RwLock::new(None),
        }
    }

    /// Pre-seed the slot, e.g. with a payload exported from elsewhere
    pub fn with_payload(name: &str, payload: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: RwLock::new(Some(payload.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.read().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.value.write() = Some(payload.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
