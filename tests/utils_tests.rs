//! Utility tests
//!
//! URL validation and code generation.

use std::collections::HashSet;

use smartshort::utils::url_validator::UrlValidationError;
use smartshort::utils::{
    FALLBACK_ALIAS_LENGTH, generate_id, generate_random_code, generate_short_code, is_valid_url,
    sanitize_alias, validate_url,
};

// =============================================================================
// URL validation
// =============================================================================

#[test]
fn test_valid_urls() {
    let valid = [
        "https://example.com",
        "http://example.com/path?q=1#frag",
        "https://sub.domain.example.co.uk:8443/a/b",
        "ftp://files.example.com/file.txt",
        "http://127.0.0.1:8080/r/abc",
        "https://[::1]/",
        "  https://example.com/padded  ",
    ];
    for url in valid {
        assert!(is_valid_url(url), "{} should be valid", url);
    }
}

#[test]
fn test_urls_without_scheme_or_authority() {
    let invalid = [
        "",
        "   ",
        "example.com",
        "www.example.com/path",
        "/relative/path",
        "mailto:someone@example.com",
        "javascript:alert(1)",
        "data:text/plain,hello",
        "http://",
        "just some words",
    ];
    for url in invalid {
        assert!(!is_valid_url(url), "{:?} should be invalid", url);
    }
}

#[test]
fn test_validation_reasons() {
    assert!(matches!(validate_url(""), Err(UrlValidationError::EmptyUrl)));
    assert!(matches!(
        validate_url("example.com"),
        Err(UrlValidationError::InvalidFormat(_))
    ));
    assert!(matches!(
        validate_url("mailto:a@b.c"),
        Err(UrlValidationError::MissingAuthority(ref scheme)) if scheme == "mailto"
    ));
}

// =============================================================================
// Code generation
// =============================================================================

#[test]
fn test_generated_lengths_and_alphabet() {
    let is_lower_alnum = |s: &str| s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    let id = generate_id();
    assert_eq!(id.len(), 7);
    assert!(is_lower_alnum(&id));

    let code = generate_short_code();
    assert_eq!(code.len(), 7);
    assert!(is_lower_alnum(&code));

    let alias = generate_random_code(FALLBACK_ALIAS_LENGTH);
    assert_eq!(alias.len(), 6);
    assert!(is_lower_alnum(&alias));

    assert_eq!(generate_random_code(0), "");
}

#[test]
fn test_generated_codes_vary() {
    let codes: HashSet<String> = (0..200).map(|_| generate_short_code()).collect();
    // 36^7 空间，200 次基本不会重复
    assert!(codes.len() > 190);
}

#[test]
fn test_sanitize_alias_unicode_dropped() {
    assert_eq!(sanitize_alias("café-链接"), "caf-");
    assert_eq!(sanitize_alias("🚀"), "");
}
