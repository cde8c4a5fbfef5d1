//! 翻译配置管理
//!
//! 提供简化的配置管理，支持配置文件、环境变量和默认值

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{TranslationError, TranslationResult};
use super::language::BASE_LANGUAGE_CODE;
use crate::env::{translation, EnvVar};

/// 配置常量
pub mod constants {
    /// 默认翻译 API 端点（LibreTranslate 兼容）
    pub const DEFAULT_API_URL: &str = "https://libretranslate.com/translate";

    /// 默认 HTTP 传输超时（秒）
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

    /// 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "translation-config.toml",
        ".translation-config.toml",
        "~/.config/hubris-site/translation.toml",
    ];
}

fn default_api_url() -> String {
    constants::DEFAULT_API_URL.to_string()
}

fn default_source_lang() -> String {
    BASE_LANGUAGE_CODE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// 翻译配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 远程翻译接口地址
    pub api_url: String,
    /// 接口密钥（自建端点通常不需要）
    pub api_key: Option<String>,
    /// 源语言代码，站点全部文案以该语言撰写
    pub source_lang: String,
    /// HTTP 传输超时（秒）。翻译服务本身不设超时，超时只来自传输层
    pub request_timeout_secs: u64,
    /// 请求 User-Agent
    pub user_agent: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            source_lang: default_source_lang(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TranslationConfig {
    /// 创建带指定接口地址的默认配置
    pub fn default_with_url(api_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }
        config
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(TranslationError::ConfigError(format!(
                "接口地址无效: {}",
                self.api_url
            )));
        }

        if self.source_lang.len() != 2 {
            return Err(TranslationError::ConfigError(
                "源语言必须是两位 ISO 639-1 代码".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(TranslationError::ConfigError(
                "传输超时不能为0".to_string(),
            ));
        }

        Ok(())
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_url) = translation::ApiUrl::get() {
            tracing::info!("环境变量覆盖 API URL: {}", api_url);
            self.api_url = api_url;
        }

        if let Ok(api_key) = translation::ApiKey::get() {
            if !api_key.is_empty() {
                self.api_key = Some(api_key);
            }
        }

        if let Ok(source_lang) = translation::SourceLang::get() {
            self.source_lang = source_lang;
        }

        if let Ok(timeout) = translation::RequestTimeout::get() {
            self.request_timeout_secs = timeout.as_secs();
        }
    }

    /// 传输超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 简化的配置管理器
pub struct ConfigManager {
    config: TranslationConfig,
}

impl ConfigManager {
    /// 创建新的配置管理器：配置文件 → 环境变量 → 校验
    pub fn new() -> TranslationResult<Self> {
        let mut config = Self::load_config()?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self { config })
    }

    /// 获取配置
    pub fn get_config(&self) -> &TranslationConfig {
        &self.config
    }

    /// 从文件加载配置
    fn load_config() -> TranslationResult<TranslationConfig> {
        // 首先尝试加载 .env 文件
        Self::load_dotenv();

        // 查找配置文件
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(&expanded_path);
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(TranslationConfig::default())
    }

    /// 从指定文件加载配置
    fn load_from_file(path: &str) -> TranslationResult<TranslationConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::ConfigError(format!("读取配置文件失败: {}", e)))?;

        Ok(toml::from_str(&content)?)
    }

    /// 加载 .env 文件
    fn load_dotenv() {
        let env_files = [".env.local", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() {
                if dotenv::from_filename(env_file).is_ok() {
                    tracing::info!("已加载环境变量文件: {}", env_file);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranslationConfig::default();
        assert_eq!(config.api_url, constants::DEFAULT_API_URL);
        assert_eq!(config.source_lang, "en");
        assert_eq!(config.api_key, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_with_url() {
        let config = TranslationConfig::default_with_url(Some("http://localhost:5000/translate"));
        assert_eq!(config.api_url, "http://localhost:5000/translate");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: TranslationConfig =
            toml::from_str(r#"api_url = "http://localhost:5000/translate""#)
                .expect("Partial config should parse");
        assert_eq!(config.api_url, "http://localhost:5000/translate");
        assert_eq!(config.source_lang, "en");
        assert_eq!(
            config.request_timeout_secs,
            constants::DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("HUBRIS_TRANSLATION_API_URL", "http://localhost:1188/translate");
        std::env::set_var("HUBRIS_TRANSLATION_SOURCE_LANG", "EN");

        let mut config = TranslationConfig::default();
        config.apply_env_overrides();

        std::env::remove_var("HUBRIS_TRANSLATION_API_URL");
        std::env::remove_var("HUBRIS_TRANSLATION_SOURCE_LANG");

        assert_eq!(config.api_url, "http://localhost:1188/translate");
        assert_eq!(config.source_lang, "en", "Language codes are normalized to lowercase");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = TranslationConfig::default();
        config.api_url = "libretranslate.com".to_string();
        assert!(config.validate().is_err());

        let mut config = TranslationConfig::default();
        config.source_lang = "english".to_string();
        assert!(config.validate().is_err());

        let mut config = TranslationConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
