//! Link store
//!
//! Sole owner of the persisted link collection. The collection lives in a
//! single [`StorageSlot`] as a JSON array, newest record first, and every
//! mutation rewrites the whole slot.
//!
//! Mutations inside one process are serialized by `write_lock`; separate
//! processes sharing a slot file are last-write-wins.

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::models::ShortLink;
use super::slot::StorageSlot;
use crate::errors::Result;

pub struct LinkStore {
    slot: Box<dyn StorageSlot>,
    write_lock: Mutex<()>,
}

impl LinkStore {
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self {
            slot,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.slot.backend_name()
    }

    pub fn slot_name(&self) -> &str {
        self.slot.name()
    }

    /// All records in stored order (newest first)
    ///
    /// Never fails: an absent, unreadable or corrupt slot yields an empty list.
    pub fn list(&self) -> Vec<ShortLink> {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read slot '{}': {}", self.slot.name(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ShortLink>>(&payload) {
            Ok(links) => {
                debug!("Loaded {} short links", links.len());
                links
            }
            Err(e) => {
                warn!(
                    "Slot '{}' holds an unparseable payload, treating as empty: {}",
                    self.slot.name(),
                    e
                );
                Vec::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Prepend a record and persist
    ///
    /// Short-code uniqueness is the caller's concern.
    pub fn create(&self, link: ShortLink) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut links = self.list();
        debug!("Creating link '{}' -> {}", link.short_code, link.original_url);
        links.insert(0, link);
        self.persist(&links)
    }

    /// Prepend only if no record uses the same short code
    ///
    /// Check and insert happen under one lock. `Ok(false)` and no write when
    /// the code is taken.
    pub fn create_unique(&self, link: ShortLink) -> Result<bool> {
        let _guard = self.write_lock.lock();

        let mut links = self.list();
        if links.iter().any(|l| l.short_code == link.short_code) {
            debug!("Short code '{}' already taken", link.short_code);
            return Ok(false);
        }

        links.insert(0, link);
        self.persist(&links)?;
        Ok(true)
    }

    /// Remove the record with `id`; `Ok(false)` and no write when absent
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();

        let mut links = self.list();
        let before = links.len();
        links.retain(|l| l.id != id);

        if links.len() == before {
            debug!("No link with id {}, nothing deleted", id);
            return Ok(false);
        }

        self.persist(&links)?;
        info!("Removed link with id: {}", id);
        Ok(true)
    }

    pub fn find_by_code(&self, code: &str) -> Option<ShortLink> {
        self.list().into_iter().find(|l| l.short_code == code)
    }

    /// Count one visit for `code` and persist
    ///
    /// Returns the updated record, or `None` without writing anything.
    pub fn increment_visit(&self, code: &str) -> Result<Option<ShortLink>> {
        let _guard = self.write_lock.lock();

        let mut links = self.list();
        let Some(link) = links.iter_mut().find(|l| l.short_code == code) else {
            return Ok(None);
        };

        link.record_visit(Utc::now().timestamp_millis());
        let updated = link.clone();

        self.persist(&links)?;
        debug!("Link '{}' now has {} visits", code, updated.visits);
        Ok(Some(updated))
    }

    fn persist(&self, links: &[ShortLink]) -> Result<()> {
        let json = serde_json::to_string_pretty(links)?;
        self.slot.write(&json)
    }
}
