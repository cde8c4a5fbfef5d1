//! Web 模块的数据类型定义

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::translation::{Language, TranslationService};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
}

/// 文本翻译请求
#[derive(Deserialize)]
pub struct TranslateTextRequest {
    pub text: String,
}

/// 文本翻译响应
///
/// 翻译后端不可用时 `translated` 与 `text` 相同，请求仍然成功。
#[derive(Serialize)]
pub struct TranslateTextResponse {
    pub text: String,
    pub translated: String,
    pub language: String,
}

/// 语言会话状态响应
#[derive(Serialize)]
pub struct LanguageStateResponse {
    pub language: Language,
    pub is_translating: bool,
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache_entries: usize,
    pub cache_hit_rate: f64,
}
