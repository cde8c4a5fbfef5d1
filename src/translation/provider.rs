//! 远程翻译接口客户端
//!
//! 定义翻译提供方的统一接口，并实现 LibreTranslate 兼容端点的 HTTP 客户端。
//! 客户端不做重试也不做内部超时控制，超时完全交给传输层（reqwest 客户端）。

use async_trait::async_trait;
use serde::Serialize;

use super::config::TranslationConfig;
use super::error::{TranslationError, TranslationResult};

/// 翻译提供方接口
///
/// 将远程调用抽象成一个操作，便于在测试中注入本地实现。
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// 将一段文本从源语言翻译为目标语言
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;

    /// 提供方名称（日志用）
    fn name(&self) -> &str;
}

/// 发往 LibreTranslate 兼容端点的请求体
#[derive(Debug, Serialize)]
pub struct TranslateRequestBody<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

/// LibreTranslate 兼容端点的客户端
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    /// 根据配置创建客户端
    pub fn new(config: &TranslationConfig) -> TranslationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TranslationError::ConfigError(format!("创建HTTP客户端失败: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let body = TranslateRequestBody {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(TranslationError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(TranslationError::ApiStatus(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("响应解析失败: {}", e)))?;

        let translated = json
            .get("translatedText")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TranslationError::InvalidResponse("响应缺少 translatedText 字段".to_string())
            })?;

        Ok(translated.to_string())
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}
