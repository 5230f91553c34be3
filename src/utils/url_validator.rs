//! URL 验证模块
//!
//! A destination must be an absolute URL with a scheme and an authority.
//! Nothing is fetched; reachability is not checked.

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidFormat(String),
    MissingAuthority(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingAuthority(scheme) => {
                write!(f, "URL has no host after the '{}:' scheme", scheme)
            }
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 可以被解析为绝对 URL（含 scheme）
/// 3. 有 authority（host），排除 `mailto:`、`javascript:` 这类 URL
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if parsed.cannot_be_a_base() || parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingAuthority(
            parsed.scheme().to_string(),
        ));
    }

    Ok(())
}

pub fn is_valid_url(url: &str) -> bool {
    validate_url(url).is_ok()
}
