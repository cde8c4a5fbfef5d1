//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers, types::AppState};

/// 创建翻译服务的路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/languages", get(handlers::list_languages))
        .route(
            "/api/language",
            get(handlers::language_state).post(handlers::select_language),
        )
        .route("/api/translate", post(handlers::translate_text))
        .route("/api/health", get(handlers::health))
}
