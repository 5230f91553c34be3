use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: redirect endpoint address
/// - storage: where the link collection lives
/// - features: link creation and addressing behaviour
/// - analysis: the generative-language collaborator
/// - logging: log level, format and output
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SS，分隔符：__
    /// 示例：SS__STORAGE__DATA_DIR=/var/lib/smartshort
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 SS，分隔符 __
            .add_source(
                Environment::with_prefix("SS")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        };

        if config.analysis.api_key.is_none() {
            config.analysis.api_key = api_key_from_env();
        }

        config
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Conventional variables holding a Gemini key
fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `file` or `memory`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Name of the slot holding the serialized collection
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl StorageConfig {
    /// Full path of the file slot
    pub fn slot_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(format!("{}.json", self.slot))
    }
}

/// 功能配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Prefix a short code is appended to when printing a short URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Where `/` redirects to
    #[serde(default = "default_default_url")]
    pub default_url: String,
    /// Refuse a user alias that is already in use unless forced
    #[serde(default = "default_reject_duplicate_alias")]
    pub reject_duplicate_alias: bool,
}

impl FeatureConfig {
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}

/// 分析服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_analysis_enabled")]
    pub enabled: bool,
    /// Base URL of the generative-language API
    #[serde(default = "default_analysis_api_url")]
    pub api_url: String,
    #[serde(default = "default_analysis_model")]
    pub model: String,
    /// Falls back to GEMINI_API_KEY / API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_analysis_timeout")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_slot() -> String {
    "smartshort_links".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080/r/".to_string()
}

fn default_default_url() -> String {
    "https://github.com".to_string()
}

fn default_reject_duplicate_alias() -> bool {
    true
}

fn default_analysis_enabled() -> bool {
    true
}

fn default_analysis_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_analysis_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_analysis_timeout() -> u64 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            data_dir: default_data_dir(),
            slot: default_slot(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_url: default_default_url(),
            reject_duplicate_alias: default_reject_duplicate_alias(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: default_analysis_enabled(),
            api_url: default_analysis_api_url(),
            model: default_analysis_model(),
            api_key: None,
            timeout_secs: default_analysis_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
