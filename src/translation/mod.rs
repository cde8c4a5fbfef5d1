//! 翻译模块
//!
//! 提供站点的按需机器翻译功能：
//! - **language**: 语言描述符和静态语言目录
//! - **service**: 翻译服务（会话状态 + 缓存 + 远程调用编排）
//! - **cache**: 按（语言代码，源文本）记忆化的翻译缓存
//! - **provider**: 远程翻译接口客户端
//! - **config**: 配置管理
//! - **error**: 错误处理
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use hubris_site::translation::{find_language, TranslationService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranslationService::create_default()?;
//! service.set_language(find_language("fr").unwrap());
//!
//! // 远程接口不可用时退回原文，调用方无需处理错误
//! let translated = service.translate("Get Quote").await;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod language;
pub mod provider;
pub mod service;

pub use cache::{CacheKey, CacheStats, TranslationCache};
pub use config::{ConfigManager, TranslationConfig};
pub use error::{TranslationError, TranslationResult};
pub use language::{find_language, supported_languages, Language, BASE_LANGUAGE_CODE};
pub use provider::{LibreTranslateProvider, TranslationProvider};
pub use service::TranslationService;

/// 翻译单段文本（便利函数）
///
/// 内部创建一次性的默认服务。需要翻译多段文本时应当构造
/// [`TranslationService`] 并复用，以便命中缓存。
pub async fn translate_text(
    text: &str,
    target_lang: &str,
    api_url: Option<&str>,
) -> TranslationResult<String> {
    let service = TranslationService::with_api_url(api_url)?;
    let language =
        find_language(target_lang).unwrap_or_else(|| Language::with_code(target_lang));
    service.set_language(language);
    Ok(service.translate(text).await)
}
