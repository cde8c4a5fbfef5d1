//! 翻译模块统一错误处理
//!
//! 提供结构化错误类型。注意：`TranslationService::translate` 对外从不返回错误，
//! 这里的类型用于服务构造、配置加载以及远程调用内部的失败分类。

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 远程接口返回非成功状态
    #[error("翻译接口返回状态 {0}")]
    ApiStatus(u16),

    /// 请求速率过快
    #[error("请求速率过快，已达到限制")]
    RateLimitExceeded,

    /// 响应缺少译文字段或无法解析
    #[error("响应无效: {0}")]
    InvalidResponse(String),
}

impl TranslationError {
    /// 检查错误是否可重试
    ///
    /// 属于"翻译暂不可用"一类的错误都允许后续调用重试；
    /// 配置错误重试没有意义。
    pub fn is_retryable(&self) -> bool {
        match self {
            TranslationError::ConfigError(_) => false,
            TranslationError::NetworkError(_) => true,
            TranslationError::ApiStatus(_) => true,
            TranslationError::RateLimitExceeded => true,
            TranslationError::InvalidResponse(_) => true,
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        TranslationError::NetworkError(error.to_string())
    }
}

impl From<toml::de::Error> for TranslationError {
    fn from(error: toml::de::Error) -> Self {
        TranslationError::ConfigError(format!("TOML解析错误: {}", error))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(!TranslationError::ConfigError("bad".into()).is_retryable());
        assert!(TranslationError::NetworkError("refused".into()).is_retryable());
        assert!(TranslationError::ApiStatus(500).is_retryable());
        assert!(TranslationError::RateLimitExceeded.is_retryable());
        assert!(TranslationError::InvalidResponse("no field".into()).is_retryable());
    }
}
