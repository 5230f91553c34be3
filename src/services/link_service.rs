//! Link management service
//!
//! Provides the link creation flow and the read/delete operations shared by
//! the CLI and the HTTP endpoint.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{Result, SmartshortError};
use crate::services::analysis::{AnalysisReport, Analyzer};
use crate::storage::{LinkMetadata, LinkStore, ShortLink};
use crate::utils::url_validator::validate_url;
use crate::utils::{generate_id, generate_short_code, sanitize_alias};

// ============ Request/Response DTOs ============

/// Request to create a new link
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    /// Destination URL
    pub url: String,
    /// Preferred short code (sanitized; generated if empty)
    pub alias: Option<String>,
    /// Metadata from a successful analysis
    pub metadata: Option<LinkMetadata>,
    /// Allow an alias that is already in use
    pub force: bool,
}

/// Result of link creation
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    /// The created link
    pub link: ShortLink,
    /// Whether the code was auto-generated
    pub generated_code: bool,
    /// An older record with the same code now sits behind this one
    pub shadows_existing: bool,
}

/// Collection-wide numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub total_links: usize,
    pub total_visits: u64,
    /// Links resolved at least once
    pub visited_links: usize,
    pub most_visited: Option<ShortLink>,
}

// ============ LinkService Implementation ============

/// Service for link management operations
pub struct LinkService {
    store: Arc<LinkStore>,
    reject_duplicate_alias: bool,
}

impl LinkService {
    pub fn new(store: Arc<LinkStore>, reject_duplicate_alias: bool) -> Self {
        Self {
            store,
            reject_duplicate_alias,
        }
    }

    pub fn store(&self) -> &Arc<LinkStore> {
        &self.store
    }

    /// Create a new short link
    ///
    /// Generated codes are not checked against the collection.
    pub fn create_link(&self, req: CreateLinkRequest) -> Result<LinkCreateResult> {
        let url = req.url.trim();
        validate_url(url).map_err(|e| SmartshortError::validation(e.to_string()))?;

        let alias = req
            .alias
            .as_deref()
            .map(sanitize_alias)
            .filter(|a| !a.is_empty());

        let (code, generated) = match alias {
            Some(alias) => (alias, false),
            None => (generate_short_code(), true),
        };

        let link = ShortLink::new(generate_id(), code, url.to_string(), req.metadata);
        let exclusive = !generated && self.reject_duplicate_alias && !req.force;

        let shadows_existing = if exclusive {
            // 检查与写入在同一把锁内完成
            if !self.store.create_unique(link.clone())? {
                return Err(SmartshortError::link_already_exists(format!(
                    "Short code '{}' already exists. Use --force to add it anyway.",
                    link.short_code
                )));
            }
            false
        } else {
            let shadows = !generated && self.store.find_by_code(&link.short_code).is_some();
            if shadows {
                warn!(
                    "Short code '{}' already exists, new link shadows it",
                    link.short_code
                );
            }
            self.store.create(link.clone())?;
            shadows
        };

        info!(
            "LinkService: created link '{}' -> '{}'",
            link.short_code, link.original_url
        );

        Ok(LinkCreateResult {
            link,
            generated_code: generated,
            shadows_existing,
        })
    }

    /// Create a link after asking the analyzer about it
    ///
    /// A successful analysis contributes metadata and, if no alias was given,
    /// its suggested alias. A fallback contributes nothing and never blocks
    /// creation.
    pub async fn create_link_with_analysis(
        &self,
        url: &str,
        alias: Option<String>,
        force: bool,
        analyzer: &Analyzer,
    ) -> Result<(LinkCreateResult, AnalysisReport)> {
        // 先校验，避免无效 URL 触发外部请求
        validate_url(url.trim()).map_err(|e| SmartshortError::validation(e.to_string()))?;

        let report = analyzer.analyze(url.trim()).await;

        let user_alias = alias.filter(|a| !sanitize_alias(a).is_empty());
        let alias = match user_alias {
            Some(alias) => Some(alias),
            None => report
                .suggested_alias()
                .filter(|suggested| {
                    let taken = self.store.find_by_code(suggested).is_some();
                    if taken {
                        debug!("Suggested alias '{}' is taken, generating a code", suggested);
                    }
                    !taken
                })
                .map(String::from),
        };

        let result = self.create_link(CreateLinkRequest {
            url: url.to_string(),
            alias,
            metadata: report.metadata(),
            force,
        })?;

        Ok((result, report))
    }

    pub fn list_links(&self) -> Vec<ShortLink> {
        self.store.list()
    }

    /// Look a link up without counting a visit
    pub fn get_link(&self, code: &str) -> Option<ShortLink> {
        self.store.find_by_code(code)
    }

    /// Delete by record id; `Ok(false)` when nothing matched
    pub fn delete_link(&self, id: &str) -> Result<bool> {
        let removed = self.store.delete_by_id(id)?;
        if removed {
            info!("LinkService: deleted '{}'", id);
        }
        Ok(removed)
    }

    pub fn stats(&self) -> LinkStats {
        let links = self.store.list();

        LinkStats {
            total_links: links.len(),
            total_visits: links.iter().map(|l| l.visits).sum(),
            visited_links: links.iter().filter(|l| l.visits > 0).count(),
            most_visited: links
                .iter()
                .filter(|l| l.visits > 0)
                .max_by_key(|l| l.visits)
                .cloned(),
        }
    }
}
