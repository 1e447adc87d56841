use crate::error::Result;
use regex::Regex;

/// 内部模块引用提取器
///
/// 匹配 `"<prefix>/<rest>"` 形式的字符串字面量，返回 `<rest>`
pub struct ReferenceExtractor {
    pattern: Regex,
}

impl ReferenceExtractor {
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r#""{}/([^"\n]+)""#, regex::escape(prefix)))?;
        Ok(Self { pattern })
    }

    /// 按源码顺序返回所有引用 (不去重)
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
