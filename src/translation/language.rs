//! 语言目录
//!
//! 站点支持的语言描述符和静态语言目录。所有页面文案以基准语言（英语）撰写，
//! 语言描述符在启动时由静态目录构造，此后不再变化。

use serde::{Deserialize, Serialize};

/// 基准语言代码，站点全部源文案以该语言撰写
pub const BASE_LANGUAGE_CODE: &str = "en";

/// 语言描述符
///
/// 语言的身份由 `code`（ISO 639-1 代码）决定；其余字段仅用于展示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639-1 语言代码（如 "en"、"fr"）
    pub code: String,
    /// 英文显示名称
    pub name: String,
    /// 该语言自身文字书写的名称
    pub native_name: String,
    /// 展示用旗帜符号
    pub flag: String,
}

impl Language {
    pub fn new(code: &str, name: &str, native_name: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            flag: flag.to_string(),
        }
    }

    /// 仅凭代码构造语言描述符（目录之外的语言）
    pub fn with_code(code: &str) -> Self {
        Self::new(code, code, code, "")
    }

    /// 基准语言（英语）
    pub fn base() -> Self {
        Self::new(BASE_LANGUAGE_CODE, "English", "English", "\u{1F1FA}\u{1F1F8}")
    }

    /// 是否为基准语言
    pub fn is_base(&self) -> bool {
        self.code == BASE_LANGUAGE_CODE
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

// 静态语言目录：代码、英文名、本语言名、旗帜
// 英语排在首位（基准语言），其余按站点语言选择器中的顺序排列
const LANGUAGE_TABLE: &[(&str, &str, &str, &str)] = &[
    ("en", "English", "English", "\u{1F1FA}\u{1F1F8}"),
    ("fr", "French", "Français", "\u{1F1EB}\u{1F1F7}"),
    ("es", "Spanish", "Español", "\u{1F1EA}\u{1F1F8}"),
    ("pt", "Portuguese", "Português", "\u{1F1F5}\u{1F1F9}"),
    ("de", "German", "Deutsch", "\u{1F1E9}\u{1F1EA}"),
    ("it", "Italian", "Italiano", "\u{1F1EE}\u{1F1F9}"),
    ("ru", "Russian", "Русский", "\u{1F1F7}\u{1F1FA}"),
    ("zh", "Chinese", "中文", "\u{1F1E8}\u{1F1F3}"),
    ("ja", "Japanese", "日本語", "\u{1F1EF}\u{1F1F5}"),
    ("ar", "Arabic", "العربية", "\u{1F1F8}\u{1F1E6}"),
    ("hi", "Hindi", "हिन्दी", "\u{1F1EE}\u{1F1F3}"),
    ("sw", "Swahili", "Kiswahili", "\u{1F1F0}\u{1F1EA}"),
];

/// 获取站点支持的全部语言
pub fn supported_languages() -> Vec<Language> {
    LANGUAGE_TABLE
        .iter()
        .map(|(code, name, native, flag)| Language::new(code, name, native, flag))
        .collect()
}

/// 按代码在目录中查找语言
pub fn find_language(code: &str) -> Option<Language> {
    LANGUAGE_TABLE
        .iter()
        .find(|(c, _, _, _)| *c == code)
        .map(|(code, name, native, flag)| Language::new(code, name, native, flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_are_unique() {
        let languages = supported_languages();
        let codes: HashSet<&str> = languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes.len(), languages.len(), "Language codes must be unique");
    }

    #[test]
    fn test_base_language_is_first() {
        let languages = supported_languages();
        assert_eq!(languages[0].code, BASE_LANGUAGE_CODE);
        assert!(languages[0].is_base());
    }

    #[test]
    fn test_find_language() {
        let fr = find_language("fr").expect("French should be in the catalog");
        assert_eq!(fr.name, "French");
        assert_eq!(fr.native_name, "Français");
        assert!(find_language("xx").is_none());
    }

    #[test]
    fn test_with_code_builds_bare_descriptor() {
        let lang = Language::with_code("nl");
        assert_eq!(lang.code, "nl");
        assert_eq!(lang.name, "nl");
        assert!(!lang.is_base());
    }
}
