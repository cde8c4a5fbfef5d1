//! 翻译缓存
//!
//! 以（目标语言代码，源文本）为键缓存翻译结果。缓存只增不减：
//! 没有容量上限、没有过期时间、进程生命周期内从不清空。站点文案是
//! 少量固定的营销短句，语言集合也是固定的，键空间天然有界。
//!
//! 同一个键被并发写入时后写者获胜；两次成功翻译的结果预期一致，
//! 覆盖不会造成数据损坏。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// 核心类型
// ============================================================================

/// 缓存键：目标语言代码 + 原始文本
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub language: String,
    pub text: String,
}

impl CacheKey {
    pub fn new(language: &str, text: &str) -> Self {
        Self {
            language: language.to_string(),
            text: text.to_string(),
        }
    }
}

/// 缓存统计信息
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub total_entries: usize,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }
}

/// 翻译缓存
///
/// 克隆代价很低（内部为 `Arc`），所有克隆共享同一份数据。
#[derive(Clone)]
pub struct TranslationCache {
    entries: Arc<RwLock<HashMap<CacheKey, String>>>,
    stats: Arc<RwLock<CacheStats>>,
}

// ============================================================================
// 实现
// ============================================================================

impl TranslationCache {
    /// 创建新的翻译缓存
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        }
    }

    /// 查找缓存条目
    pub fn get(&self, language: &str, text: &str) -> Option<String> {
        // 两把锁不嵌套持有，先查数据再记统计
        let hit = {
            let entries = self.entries.read().unwrap();
            entries.get(&CacheKey::new(language, text)).cloned()
        };

        let mut stats = self.stats.write().unwrap();
        stats.total_requests += 1;
        if hit.is_some() {
            stats.cache_hits += 1;
        } else {
            stats.cache_misses += 1;
        }

        hit
    }

    /// 插入缓存条目（已存在时覆盖，后写者获胜）
    pub fn insert(&self, language: &str, text: &str, translated: String) {
        let total = {
            let mut entries = self.entries.write().unwrap();
            entries.insert(CacheKey::new(language, text), translated);
            entries.len()
        };

        let mut stats = self.stats.write().unwrap();
        stats.total_entries = total;
    }

    /// 检查是否包含指定键
    pub fn contains(&self, language: &str, text: &str) -> bool {
        let entries = self.entries.read().unwrap();
        entries.contains_key(&CacheKey::new(language, text))
    }

    /// 获取缓存大小
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap();
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> CacheStats {
        let stats = self.stats.read().unwrap();
        let entries = self.entries.read().unwrap();

        let mut result = stats.clone();
        result.total_entries = entries.len();
        result
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}
