//! 翻译服务核心模块
//!
//! 整个站点中"当前激活语言是什么"和"这段文案的译文是什么"的唯一权威。
//! 服务组合了语言会话状态、翻译缓存和远程翻译接口，并保证对外的
//! `translate` 调用永远成功：远程接口不可用时退回原文，页面渲染
//! 绝不因为翻译后端故障而阻塞或出错。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::cache::TranslationCache;
use super::config::{ConfigManager, TranslationConfig};
use super::error::TranslationResult;
use super::language::Language;
use super::provider::{LibreTranslateProvider, TranslationProvider};

/// 翻译服务
pub struct TranslationService {
    /// 当前激活语言
    current_language: RwLock<Language>,
    /// 未完成的远程调用计数，仅用于界面的忙碌指示
    in_flight: AtomicUsize,
    cache: TranslationCache,
    provider: Arc<dyn TranslationProvider>,
    config: TranslationConfig,
}

/// 远程调用计数守卫
///
/// 计数必须在每条退出路径上释放（包括 panic），因此通过 Drop 归还。
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn acquire(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl TranslationService {
    /// 创建翻译服务
    ///
    /// 服务实例应在应用启动时创建一次，之后通过 `Arc` 显式传递给
    /// 各个使用方；不依赖任何全局可变状态。
    pub fn new(config: TranslationConfig, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            current_language: RwLock::new(Language::base()),
            in_flight: AtomicUsize::new(0),
            cache: TranslationCache::new(),
            provider,
            config,
        }
    }

    /// 创建默认翻译服务：加载配置并连接 LibreTranslate 兼容端点
    pub fn create_default() -> TranslationResult<Self> {
        let config = ConfigManager::new()?.get_config().clone();
        let provider = Arc::new(LibreTranslateProvider::new(&config)?);
        Ok(Self::new(config, provider))
    }

    /// 创建指向指定端点的翻译服务
    pub fn with_api_url(api_url: Option<&str>) -> TranslationResult<Self> {
        let config = TranslationConfig::default_with_url(api_url);
        config.validate()?;
        let provider = Arc::new(LibreTranslateProvider::new(&config)?);
        Ok(Self::new(config, provider))
    }

    /// 获取当前激活语言
    pub fn current_language(&self) -> Language {
        self.current_language.read().unwrap().clone()
    }

    /// 切换当前语言
    ///
    /// 同步替换，不做目录校验，也不清理缓存：缓存按语言代码分区，
    /// 切换语言只是改变后续查询落在哪个分区。
    pub fn set_language(&self, language: Language) {
        let mut current = self.current_language.write().unwrap();
        tracing::debug!("语言切换: {} -> {}", current.code, language.code);
        *current = language;
    }

    /// 是否有未完成的翻译调用（界面忙碌指示用，不是并发保护）
    pub fn is_translating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// 访问翻译缓存（统计/诊断用）
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// 翻译一段以源语言撰写的文案
    ///
    /// 该调用永远返回一个字符串，按顺序：
    ///
    /// 1. 当前语言就是源语言，或文本为空白，原样返回；
    /// 2. 缓存命中，返回缓存值；
    /// 3. 调用远程接口，成功则写入缓存并返回译文；
    ///    任何失败都退回原文，并且不写缓存（后续调用允许重试）。
    ///
    /// 语言代码在进入时捕获一次，之后的缓存读写和远程请求都使用该值。
    /// 调用过程中切换语言不影响本次调用：迟到的响应仍写入发起时语言
    /// 的缓存分区。
    pub async fn translate(&self, text: &str) -> String {
        let target = self.current_language.read().unwrap().code.clone();

        if target == self.config.source_lang || text.trim().is_empty() {
            return text.to_string();
        }

        if let Some(cached) = self.cache.get(&target, text) {
            return cached;
        }

        let _guard = InFlightGuard::acquire(&self.in_flight);

        match self
            .provider
            .translate(text, &self.config.source_lang, &target)
            .await
        {
            Ok(translated) => {
                self.cache.insert(&target, text, translated.clone());
                translated
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    target_lang = %target,
                    "翻译失败，返回原文: {}",
                    e
                );
                text.to_string()
            }
        }
    }
}
