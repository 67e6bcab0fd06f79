//! Short id validation for incoming request paths

use regex::Regex;

use crate::errors::{CrclinkError, Result};

pub const MIN_ID_LEN: usize = 4;
pub const MAX_ID_LEN: usize = 12;

/// Matches 4 to 12 ASCII alphanumerics. Built once at startup and shared by
/// all workers.
#[derive(Debug, Clone)]
pub struct IdValidator {
    pattern: Regex,
}

impl IdValidator {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&format!("^[A-Za-z0-9]{{{},{}}}$", MIN_ID_LEN, MAX_ID_LEN))
            .map_err(|e| CrclinkError::config(format!("Failed to compile id pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// 去掉首尾的 `/` 后校验，返回裁剪后的 id
    pub fn parse<'a>(&self, path: &'a str) -> Result<&'a str> {
        let trimmed = path.trim_matches('/');
        if self.pattern.is_match(trimmed) {
            Ok(trimmed)
        } else {
            Err(CrclinkError::invalid_id(format!("invalid URL id: {}", trimmed)))
        }
    }
}
