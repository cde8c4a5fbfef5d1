//! 翻译 API 处理器

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    response::Json,
};

use crate::translation::{supported_languages, Language};
use crate::web::types::{
    AppState, HealthResponse, LanguageStateResponse, TranslateTextRequest, TranslateTextResponse,
};

/// 语言目录
pub async fn list_languages() -> Json<Vec<Language>> {
    Json(supported_languages())
}

/// 当前语言会话状态
pub async fn language_state(State(state): State<Arc<AppState>>) -> Json<LanguageStateResponse> {
    Json(LanguageStateResponse {
        language: state.service.current_language(),
        is_translating: state.service.is_translating(),
    })
}

/// 切换当前语言
///
/// 按约定接受任意语言描述符，不做目录校验。
pub async fn select_language(
    State(state): State<Arc<AppState>>,
    ExtractJson(language): ExtractJson<Language>,
) -> Json<LanguageStateResponse> {
    tracing::info!("切换语言: {}", language.code);
    state.service.set_language(language);

    Json(LanguageStateResponse {
        language: state.service.current_language(),
        is_translating: state.service.is_translating(),
    })
}

/// 翻译一段文本
///
/// 永远返回 200：后端故障时 `translated` 退回原文。
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<TranslateTextRequest>,
) -> Json<TranslateTextResponse> {
    let translated = state.service.translate(&request.text).await;

    Json(TranslateTextResponse {
        text: request.text,
        translated,
        language: state.service.current_language().code,
    })
}

/// 健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.service.cache().get_stats();

    Json(HealthResponse {
        status: "ok",
        cache_entries: stats.total_entries,
        cache_hit_rate: stats.hit_rate(),
    })
}
