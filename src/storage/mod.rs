use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::errors::{Result, SmartshortError};

pub mod link_store;
pub mod models;
pub mod slot;

pub use link_store::LinkStore;
pub use models::{LinkMetadata, ShortLink};
pub use slot::{FileSlot, MemorySlot, StorageSlot};

pub struct StorageFactory;

impl StorageFactory {
    /// Build the link store for the configured slot backend
    pub fn create(config: &StorageConfig) -> Result<Arc<LinkStore>> {
        let slot: Box<dyn StorageSlot> = match config.backend.as_str() {
            "file" => Box::new(FileSlot::new(&config.slot, config.slot_path())),
            "memory" => Box::new(MemorySlot::new(&config.slot)),
            other => {
                return Err(SmartshortError::config(format!(
                    "Unknown storage backend '{}'. Valid: file, memory",
                    other
                )));
            }
        };

        info!(
            "Using storage backend: {} (slot '{}')",
            slot.backend_name(),
            slot.name()
        );
        Ok(Arc::new(LinkStore::new(slot)))
    }
}
