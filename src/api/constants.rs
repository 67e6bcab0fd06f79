//! API 模块常量定义

/// 创建短链接的表单 / 提交路径
pub const URLS_API_PATH: &str = "/api/v1/urls";

/// 表单字段名
pub const URL_FORM_FIELD: &str = "url";

/// 查询参数：值为 "false"（不区分大小写）时直接返回目标 URL 而不跳转
pub const REDIRECT_QUERY_PARAM: &str = "redirect";

pub const NOT_FOUND_BODY: &str = "Not Found";

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method is not supported.";

pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";
