//! Analysis provider 抽象层
//!
//! 统一的链接分析接口，根据配置选择实现：
//! 1. analysis.enabled 且配置了 API key → GeminiProvider
//! 2. 否则 → DisabledProvider（总是失败，走 fallback）
//!
//! [`Analyzer`] never fails: a provider error is turned into a fixed-shape
//! fallback report so callers always have a result to show.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::gemini::GeminiProvider;
use crate::config::AnalysisConfig;
use crate::storage::LinkMetadata;
use crate::utils::{FALLBACK_ALIAS_LENGTH, generate_random_code};

/// Most tags kept from a provider answer
pub const MAX_TAGS: usize = 4;
/// Longest suggested alias kept from a provider answer
pub const MAX_SUGGESTED_ALIAS: usize = 10;
/// Score used when nothing is known about the link
pub const NEUTRAL_SAFETY_SCORE: u8 = 50;

/// 分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// At most 10 alphanumeric characters
    pub suggested_alias: String,
    /// 1-100, higher is safer
    pub safety_score: u8,
}

impl AnalysisResult {
    /// Result substituted when the provider fails
    pub fn fallback() -> Self {
        Self {
            title: "Unknown Link".to_string(),
            summary: "Could not analyze this link.".to_string(),
            tags: vec!["link".to_string()],
            suggested_alias: generate_random_code(FALLBACK_ALIAS_LENGTH),
            safety_score: NEUTRAL_SAFETY_SCORE,
        }
    }

    /// Clean up a raw provider answer
    ///
    /// An empty title means the provider did not really answer.
    pub fn normalized(
        title: &str,
        summary: &str,
        tags: &[String],
        suggested_alias: &str,
        safety_score: i64,
    ) -> Result<Self, AnalysisError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AnalysisError::Malformed("empty title".to_string()));
        }

        let tags = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .take(MAX_TAGS)
            .map(String::from)
            .collect();

        let suggested_alias = suggested_alias
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(MAX_SUGGESTED_ALIAS)
            .collect();

        Ok(Self {
            title: title.to_string(),
            summary: summary.trim().to_string(),
            tags,
            suggested_alias,
            safety_score: safety_score.clamp(1, 100) as u8,
        })
    }

    pub fn to_metadata(&self) -> LinkMetadata {
        LinkMetadata {
            title: Some(self.title.clone()),
            summary: Some(self.summary.clone()).filter(|s| !s.is_empty()),
            tags: Some(self.tags.clone()).filter(|t| !t.is_empty()),
        }
    }
}

/// 分析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Analysis turned off or no API key
    Disabled,
    Http(String),
    EmptyResponse,
    Malformed(String),
    /// The blocking worker died
    Task(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => write!(f, "analysis is disabled"),
            Self::Http(msg) => write!(f, "analysis request failed: {}", msg),
            Self::EmptyResponse => write!(f, "analysis service returned no text"),
            Self::Malformed(msg) => write!(f, "analysis response malformed: {}", msg),
            Self::Task(msg) => write!(f, "analysis task failed: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Link analysis trait
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// Provider used when analysis is off
pub struct DisabledProvider;

#[async_trait]
impl AnalysisProvider for DisabledProvider {
    async fn analyze(&self, _url: &str) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Disabled)
    }

    fn name(&self) -> &'static str {
        "Disabled"
    }
}

/// What [`Analyzer::analyze`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReport {
    Analyzed(AnalysisResult),
    Fallback {
        result: AnalysisResult,
        reason: AnalysisError,
    },
}

impl AnalysisReport {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            Self::Analyzed(result) => result,
            Self::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Fields worth persisting; fallback placeholders are never stored
    pub fn metadata(&self) -> Option<LinkMetadata> {
        match self {
            Self::Analyzed(result) => Some(result.to_metadata()),
            Self::Fallback { .. } => None,
        }
    }

    /// Alias proposed by the provider, if it proposed a usable one
    pub fn suggested_alias(&self) -> Option<&str> {
        match self {
            Self::Analyzed(result) if !result.suggested_alias.is_empty() => {
                Some(result.suggested_alias.as_str())
            }
            _ => None,
        }
    }
}

/// 统一分析入口
///
/// 启动时根据配置选择实现
#[derive(Clone)]
pub struct Analyzer {
    inner: Arc<dyn AnalysisProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { inner: provider }
    }

    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledProvider))
    }

    /// 根据 AnalysisConfig 初始化
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let inner: Arc<dyn AnalysisProvider> = if !config.enabled {
            debug!("Analysis: disabled by configuration");
            Arc::new(DisabledProvider)
        } else {
            match config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
                Some(key) => Arc::new(GeminiProvider::new(
                    &config.api_url,
                    &config.model,
                    key,
                    config.timeout_secs,
                )),
                None => {
                    // 未配置 key 是常态，不在 CLI 的 warn 级别输出
                    info!("Analysis: no API key configured, links will be created without metadata");
                    Arc::new(DisabledProvider)
                }
            }
        };

        debug!("Analysis: Initialized with {} provider", inner.name());
        Self { inner }
    }

    /// Analyze `url`, substituting the fallback result on any failure
    pub async fn analyze(&self, url: &str) -> AnalysisReport {
        match self.inner.analyze(url).await {
            Ok(result) => {
                debug!("Analysis of {} succeeded: {:?}", url, result.title);
                AnalysisReport::Analyzed(result)
            }
            Err(reason) => {
                if reason != AnalysisError::Disabled {
                    warn!("Analysis of {} failed, using fallback: {}", url, reason);
                }
                AnalysisReport::Fallback {
                    result: AnalysisResult::fallback(),
                    reason,
                }
            }
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.inner.name()
    }
}
