//! LinkService tests
//!
//! Tests for the link creation flow, duplicate handling, analysis
//! enrichment and collection statistics.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use smartshort::errors::SmartshortError;
use smartshort::services::{
    AnalysisError, AnalysisProvider, AnalysisResult, Analyzer, CreateLinkRequest, LinkService,
    RedirectService,
};
use smartshort::storage::{LinkMetadata, LinkStore, MemorySlot};

// =============================================================================
// Test Setup
// =============================================================================

fn memory_store() -> Arc<LinkStore> {
    Arc::new(LinkStore::new(Box::new(MemorySlot::new("smartshort_links"))))
}

fn service() -> LinkService {
    LinkService::new(memory_store(), true)
}

fn request(url: &str, alias: Option<&str>) -> CreateLinkRequest {
    CreateLinkRequest {
        url: url.to_string(),
        alias: alias.map(String::from),
        ..Default::default()
    }
}

/// Analysis provider that always answers with a fixed result
struct StubProvider {
    result: AnalysisResult,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new(alias: &str) -> Self {
        Self {
            result: AnalysisResult {
                title: "Example Domain".to_string(),
                summary: "An illustrative page.".to_string(),
                tags: vec!["example".to_string(), "docs".to_string()],
                suggested_alias: alias.to_string(),
                safety_score: 90,
            },
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AnalysisProvider for StubProvider {
    async fn analyze(&self, _url: &str) -> Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }

    fn name(&self) -> &'static str {
        "Stub"
    }
}

/// Analysis provider that always fails
struct FailingProvider;

#[async_trait]
impl AnalysisProvider for FailingProvider {
    async fn analyze(&self, _url: &str) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Http("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "Failing"
    }
}

// =============================================================================
// Plain creation
// =============================================================================

#[test]
fn test_create_with_alias() {
    let service = service();
    let result = service
        .create_link(request("https://example.com/a", Some("docs")))
        .unwrap();

    assert!(!result.generated_code);
    assert!(!result.shadows_existing);
    assert_eq!(result.link.short_code, "docs");
    assert_eq!(result.link.original_url, "https://example.com/a");
    assert_eq!(result.link.visits, 0);
    assert!(result.link.last_visited.is_none());
    assert_eq!(result.link.id.len(), 7);
}

#[test]
fn test_create_generates_code_when_alias_missing_or_blank() {
    let service = service();

    for alias in [None, Some("   "), Some("!!!")] {
        let result = service
            .create_link(request("https://example.com", alias))
            .unwrap();
        assert!(result.generated_code);
        assert_eq!(result.link.short_code.len(), 7);
        assert!(
            result
                .link
                .short_code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
    assert_eq!(service.list_links().len(), 3);
}

#[test]
fn test_create_sanitizes_alias() {
    let service = service();
    let result = service
        .create_link(request(
            "https://example.com",
            Some("  my alias/with*junk_and-a-very-long-tail  "),
        ))
        .unwrap();

    assert_eq!(result.link.short_code, "myaliaswithjunk_and-");
    assert_eq!(result.link.short_code.len(), 20);
}

#[test]
fn test_create_rejects_invalid_url_without_writing() {
    let service = service();

    for bad in ["", "   ", "not a url", "example.com", "mailto:someone@example.com"] {
        let err = service.create_link(request(bad, None)).unwrap_err();
        assert!(
            matches!(err, SmartshortError::Validation(_)),
            "{:?} should fail validation",
            bad
        );
    }
    assert!(service.list_links().is_empty());
}

#[test]
fn test_create_trims_url() {
    let service = service();
    let result = service
        .create_link(request("  https://example.com/x  ", None))
        .unwrap();
    assert_eq!(result.link.original_url, "https://example.com/x");
}

#[test]
fn test_create_keeps_supplied_metadata() {
    let service = service();
    let result = service
        .create_link(CreateLinkRequest {
            url: "https://example.com".to_string(),
            metadata: Some(LinkMetadata {
                title: Some("Example".to_string()),
                summary: None,
                tags: Some(vec!["x".to_string()]),
            }),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(result.link.title.as_deref(), Some("Example"));
    assert!(result.link.summary.is_none());
    assert!(result.link.has_metadata());
}

// =============================================================================
// Duplicate aliases
// =============================================================================

#[test]
fn test_duplicate_alias_rejected() {
    let service = service();
    service
        .create_link(request("https://example.com/old", Some("dup")))
        .unwrap();

    let err = service
        .create_link(request("https://example.com/new", Some("dup")))
        .unwrap_err();
    assert!(matches!(err, SmartshortError::LinkAlreadyExists(_)));
    assert_eq!(service.list_links().len(), 1);
}

#[test]
fn test_concurrent_duplicate_alias_admits_exactly_one() {
    let service = Arc::new(service());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            std::thread::spawn(move || {
                service
                    .create_link(request(&format!("https://example.com/{}", i), Some("race")))
                    .is_ok()
            })
        })
        .collect();
    let created = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(created, 1);
    assert_eq!(service.list_links().len(), 1);
}

#[test]
fn test_duplicate_alias_forced_shadows_old_record() {
    let service = service();
    service
        .create_link(request("https://example.com/old", Some("dup")))
        .unwrap();

    let result = service
        .create_link(CreateLinkRequest {
            force: true,
            ..request("https://example.com/new", Some("dup"))
        })
        .unwrap();

    assert!(result.shadows_existing);
    assert_eq!(service.list_links().len(), 2);
    assert_eq!(
        service.get_link("dup").unwrap().original_url,
        "https://example.com/new"
    );
}

#[test]
fn test_duplicate_alias_allowed_when_not_rejecting() {
    let service = LinkService::new(memory_store(), false);
    service
        .create_link(request("https://example.com/old", Some("dup")))
        .unwrap();

    let result = service
        .create_link(request("https://example.com/new", Some("dup")))
        .unwrap();
    assert!(result.shadows_existing);
}

// =============================================================================
// Creation with analysis
// =============================================================================

#[tokio::test]
async fn test_analysis_success_enriches_record_and_uses_suggested_alias() {
    let service = service();
    let provider = Arc::new(StubProvider::new("example"));
    let analyzer = Analyzer::new(provider.clone());

    let (result, report) = service
        .create_link_with_analysis("https://example.com", None, false, &analyzer)
        .await
        .unwrap();

    assert!(!report.is_fallback());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.link.short_code, "example");
    assert!(!result.generated_code);
    assert_eq!(result.link.title.as_deref(), Some("Example Domain"));
    assert_eq!(result.link.summary.as_deref(), Some("An illustrative page."));
    assert_eq!(
        result.link.tags,
        Some(vec!["example".to_string(), "docs".to_string()])
    );
}

#[tokio::test]
async fn test_analysis_keeps_user_alias() {
    let service = service();
    let analyzer = Analyzer::new(Arc::new(StubProvider::new("example")));

    let (result, _) = service
        .create_link_with_analysis("https://example.com", Some("mine".to_string()), false, &analyzer)
        .await
        .unwrap();

    assert_eq!(result.link.short_code, "mine");
    assert_eq!(result.link.title.as_deref(), Some("Example Domain"));
}

#[tokio::test]
async fn test_taken_suggested_alias_falls_back_to_generated_code() {
    let service = service();
    service
        .create_link(request("https://example.org", Some("example")))
        .unwrap();
    let analyzer = Analyzer::new(Arc::new(StubProvider::new("example")));

    let (result, _) = service
        .create_link_with_analysis("https://example.com", None, false, &analyzer)
        .await
        .unwrap();

    assert!(result.generated_code);
    assert_ne!(result.link.short_code, "example");
    assert_eq!(
        service.get_link("example").unwrap().original_url,
        "https://example.org"
    );
}

#[tokio::test]
async fn test_analysis_failure_still_creates_plain_record() {
    let service = service();
    let analyzer = Analyzer::new(Arc::new(FailingProvider));

    let (result, report) = service
        .create_link_with_analysis("https://example.com", None, false, &analyzer)
        .await
        .unwrap();

    assert!(report.is_fallback());
    assert_eq!(report.result().title, "Unknown Link");
    assert!(!result.link.has_metadata());
    assert!(result.link.title.is_none());
    assert!(result.link.summary.is_none());
    assert!(result.link.tags.is_none());
    // fallback alias 不被采用
    assert!(result.generated_code);
    assert_eq!(result.link.short_code.len(), 7);
    assert_eq!(service.list_links().len(), 1);
}

#[tokio::test]
async fn test_disabled_analyzer_behaves_like_failure() {
    let service = service();
    let (result, report) = service
        .create_link_with_analysis("https://example.com", None, false, &Analyzer::disabled())
        .await
        .unwrap();

    assert!(report.is_fallback());
    assert!(!result.link.has_metadata());
}

#[tokio::test]
async fn test_invalid_url_skips_analysis() {
    let service = service();
    let provider = Arc::new(StubProvider::new("example"));
    let analyzer = Analyzer::new(provider.clone());

    let err = service
        .create_link_with_analysis("nope", None, false, &analyzer)
        .await
        .unwrap_err();

    assert!(matches!(err, SmartshortError::Validation(_)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(service.list_links().is_empty());
}

// =============================================================================
// Delete / Stats
// =============================================================================

#[test]
fn test_delete_link_by_id() {
    let service = service();
    let created = service
        .create_link(request("https://example.com", Some("bye")))
        .unwrap();

    assert!(service.delete_link(&created.link.id).unwrap());
    assert!(service.get_link("bye").is_none());
    assert!(!service.delete_link(&created.link.id).unwrap());
}

#[test]
fn test_stats() {
    let store = memory_store();
    let service = LinkService::new(store.clone(), true);
    let redirect = RedirectService::new(store);

    assert_eq!(service.stats().total_links, 0);
    assert!(service.stats().most_visited.is_none());

    service
        .create_link(request("https://example.com/a", Some("a")))
        .unwrap();
    service
        .create_link(request("https://example.com/b", Some("b")))
        .unwrap();
    service
        .create_link(request("https://example.com/c", Some("c")))
        .unwrap();

    redirect.resolve("a").unwrap();
    redirect.resolve("b").unwrap();
    redirect.resolve("b").unwrap();

    let stats = service.stats();
    assert_eq!(stats.total_links, 3);
    assert_eq!(stats.total_visits, 3);
    assert_eq!(stats.visited_links, 2);
    assert_eq!(stats.most_visited.unwrap().short_code, "b");
}
