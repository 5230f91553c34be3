use std::sync::Arc;

use tracing::{debug, instrument};

use crate::errors::Result;
use crate::storage::{LinkStore, ShortLink};

/// Outcome of resolving a short code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        destination: String,
        /// Record after the visit was counted
        link: ShortLink,
    },
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            Resolution::Found { destination, .. } => Some(destination.as_str()),
            Resolution::NotFound => None,
        }
    }
}

/// Turns a short code into its destination, counting one visit per call
pub struct RedirectService {
    store: Arc<LinkStore>,
}

impl RedirectService {
    pub fn new(store: Arc<LinkStore>) -> Self {
        Self { store }
    }

    /// Each successful call increments the visit counter exactly once
    #[instrument(skip(self))]
    pub fn resolve(&self, code: &str) -> Result<Resolution> {
        match self.store.increment_visit(code)? {
            Some(link) => {
                debug!("Resolved '{}' -> {} ({} visits)", code, link.original_url, link.visits);
                Ok(Resolution::Found {
                    destination: link.original_url.clone(),
                    link,
                })
            }
            None => {
                debug!("Redirect link not found: {}", code);
                Ok(Resolution::NotFound)
            }
        }
    }
}
