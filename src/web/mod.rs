//! Web 服务器模块
//!
//! 把翻译服务通过 HTTP 暴露给站点的展示层：语言目录、语言会话
//! 状态读写和按段文本翻译。

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::env::{web as web_env, EnvVar};
use crate::translation::{TranslationError, TranslationResult, TranslationService};

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: web_env::BindAddr::get_or_default("127.0.0.1".to_string()),
            port: web_env::Port::get_or_default(7080),
        }
    }
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    service: Arc<TranslationService>,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, service: Arc<TranslationService>) -> Self {
        Self { config, service }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> TranslationResult<()> {
        let app_state = Arc::new(AppState {
            service: self.service.clone(),
        });

        let app = create_router(app_state);

        let listener = tokio::net::TcpListener::bind(format!(
            "{}:{}",
            self.config.bind_addr, self.config.port
        ))
        .await
        .map_err(|e| TranslationError::ConfigError(format!("绑定地址失败: {}", e)))?;

        tracing::info!(
            "Web server starting at http://{}:{}",
            self.config.bind_addr,
            self.config.port
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TranslationError::NetworkError(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>) -> Router {
    // 站点前端与 API 可能不同源，放开 CORS
    create_routes().with_state(app_state).layer(CorsLayer::permissive())
}
