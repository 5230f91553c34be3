use std::fmt;

#[derive(Debug, Clone)]
pub enum SmartshortError {
    FileOperation(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    LinkAlreadyExists(String),
    Analysis(String),
    Config(String),
    Server(String),
}

impl SmartshortError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SmartshortError::FileOperation(_) => "E001",
            SmartshortError::Serialization(_) => "E002",
            SmartshortError::Validation(_) => "E003",
            SmartshortError::NotFound(_) => "E004",
            SmartshortError::LinkAlreadyExists(_) => "E005",
            SmartshortError::Analysis(_) => "E006",
            SmartshortError::Config(_) => "E007",
            SmartshortError::Server(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SmartshortError::FileOperation(_) => "File Operation Error",
            SmartshortError::Serialization(_) => "Serialization Error",
            SmartshortError::Validation(_) => "Validation Error",
            SmartshortError::NotFound(_) => "Resource Not Found",
            SmartshortError::LinkAlreadyExists(_) => "Link Already Exists",
            SmartshortError::Analysis(_) => "Analysis Error",
            SmartshortError::Config(_) => "Configuration Error",
            SmartshortError::Server(_) => "Server Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SmartshortError::FileOperation(msg)
            | SmartshortError::Serialization(msg)
            | SmartshortError::Validation(msg)
            | SmartshortError::NotFound(msg)
            | SmartshortError::LinkAlreadyExists(msg)
            | SmartshortError::Analysis(msg)
            | SmartshortError::Config(msg)
            | SmartshortError::Server(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SmartshortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SmartshortError {}

// 便捷的构造函数
impl SmartshortError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SmartshortError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SmartshortError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SmartshortError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SmartshortError::NotFound(msg.into())
    }

    pub fn link_already_exists<T: Into<String>>(msg: T) -> Self {
        SmartshortError::LinkAlreadyExists(msg.into())
    }

    pub fn analysis<T: Into<String>>(msg: T) -> Self {
        SmartshortError::Analysis(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SmartshortError::Config(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        SmartshortError::Server(msg.into())
    }
}

impl From<std::io::Error> for SmartshortError {
    fn from(err: std::io::Error) -> Self {
        SmartshortError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SmartshortError {
    fn from(err: serde_json::Error) -> Self {
        SmartshortError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SmartshortError {
    fn from(err: config::ConfigError) -> Self {
        SmartshortError::Config(err.to_string())
    }
}

impl From<crate::services::AnalysisError> for SmartshortError {
    fn from(err: crate::services::AnalysisError) -> Self {
        SmartshortError::Analysis(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SmartshortError>;
