// 集成测试公共模块
//
// 提供测试用的本地翻译提供方和服务构造辅助

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use hubris_site::translation::{
    TranslationConfig, TranslationError, TranslationProvider, TranslationResult,
    TranslationService,
};

/// 测试用翻译提供方
///
/// 按（目标语言，文本）返回预置译文，未预置时返回 "[lang] text"。
/// 记录调用次数，可配置为失败或延迟，模拟远程接口的各种行为。
pub struct MockProvider {
    responses: Mutex<HashMap<(String, String), String>>,
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: Mutex::new(None),
        }
    }

    /// 预置一条译文
    pub fn stub(&self, target_lang: &str, text: &str, translated: &str) {
        self.responses.lock().unwrap().insert(
            (target_lang.to_string(), text.to_string()),
            translated.to_string(),
        );
    }

    /// 已发出的远程调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 让后续调用全部失败（模拟接口不可用）
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 让后续调用延迟返回（模拟网络往返）
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(TranslationError::NetworkError(
                "connection refused".to_string(),
            ));
        }

        assert_eq!(
            source_lang, "en",
            "Outgoing requests must carry the base language as source"
        );

        let responses = self.responses.lock().unwrap();
        Ok(responses
            .get(&(target_lang.to_string(), text.to_string()))
            .cloned()
            .unwrap_or_else(|| format!("[{}] {}", target_lang, text)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// 构造使用测试提供方的翻译服务
pub fn service_with_mock() -> (Arc<TranslationService>, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::new());
    let service = Arc::new(TranslationService::new(
        TranslationConfig::default(),
        provider.clone(),
    ));
    (service, provider)
}
