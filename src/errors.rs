use std::fmt;

#[derive(Debug, Clone)]
pub enum CrclinkError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    InvalidId(String),
    NotFound(String),
    UniqueViolation(String),
}

impl CrclinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            CrclinkError::Config(_) => "E001",
            CrclinkError::DatabaseConfig(_) => "E002",
            CrclinkError::DatabaseConnection(_) => "E003",
            CrclinkError::DatabaseOperation(_) => "E004",
            CrclinkError::FileOperation(_) => "E005",
            CrclinkError::InvalidId(_) => "E006",
            CrclinkError::NotFound(_) => "E007",
            CrclinkError::UniqueViolation(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            CrclinkError::Config(_) => "Configuration Error",
            CrclinkError::DatabaseConfig(_) => "Database Configuration Error",
            CrclinkError::DatabaseConnection(_) => "Database Connection Error",
            CrclinkError::DatabaseOperation(_) => "Database Operation Error",
            CrclinkError::FileOperation(_) => "File Operation Error",
            CrclinkError::InvalidId(_) => "Invalid Id",
            CrclinkError::NotFound(_) => "Resource Not Found",
            CrclinkError::UniqueViolation(_) => "Unique Constraint Violation",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            CrclinkError::Config(msg)
            | CrclinkError::DatabaseConfig(msg)
            | CrclinkError::DatabaseConnection(msg)
            | CrclinkError::DatabaseOperation(msg)
            | CrclinkError::FileOperation(msg)
            | CrclinkError::InvalidId(msg)
            | CrclinkError::NotFound(msg)
            | CrclinkError::UniqueViolation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（启动失败时打印到终端）
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CrclinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CrclinkError {}

// 便捷的构造函数
impl CrclinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        CrclinkError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        CrclinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        CrclinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        CrclinkError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        CrclinkError::FileOperation(msg.into())
    }

    pub fn invalid_id<T: Into<String>>(msg: T) -> Self {
        CrclinkError::InvalidId(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        CrclinkError::NotFound(msg.into())
    }

    pub fn unique_violation<T: Into<String>>(msg: T) -> Self {
        CrclinkError::UniqueViolation(msg.into())
    }
}

impl From<sea_orm::DbErr> for CrclinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        CrclinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CrclinkError {
    fn from(err: std::io::Error) -> Self {
        CrclinkError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for CrclinkError {
    fn from(err: config::ConfigError) -> Self {
        CrclinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrclinkError>;
