//! Platform categories derived from tool names

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::ToolDescriptor;

/// Known category prefixes and their display labels, in match order
///
/// Order matters: the first prefix that matches a name wins.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("xiaohongshu", "小红书"),
    ("tiktok", "TikTok"),
    ("douyin", "抖音"),
    ("instagram", "Instagram"),
    ("youtube", "YouTube"),
    ("twitter", "Twitter/X"),
    ("weibo", "微博"),
    ("kuaishou", "快手"),
    ("threads", "Threads"),
    ("lemon8", "Lemon8"),
    ("tikhub", "TikHub 通用"),
    ("health", "健康检查"),
];

/// Separator between the platform and the rest of a tool name
pub const SEPARATOR: char = '_';

static LABELS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CATEGORIES.iter().copied().collect());

/// Classify a tool name into its category key
///
/// Returns the first known prefix of `name`; otherwise the text before the
/// first separator, or `name` itself when there is no separator or it leads.
///
/// ```
/// use tikhub_core::catalog::classify;
///
/// assert_eq!(classify("xiaohongshu_web_search_notes"), "xiaohongshu");
/// assert_eq!(classify("bilibili_fetch_video"), "bilibili");
/// assert_eq!(classify("ping"), "ping");
/// ```
pub fn classify(name: &str) -> &str {
    if let Some((prefix, _)) = CATEGORIES.iter().find(|(prefix, _)| name.starts_with(prefix)) {
        return &name[..prefix.len()];
    }

    match name.find(SEPARATOR) {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Display label for a category key; unknown keys display as themselves
pub fn label(category: &str) -> &str {
    LABELS.get(category).copied().unwrap_or(category)
}

/// Whether `category` is one of the known platform keys
pub fn is_known(category: &str) -> bool {
    LABELS.contains_key(category)
}

/// Tool counts per category, in order of first appearance
pub fn category_counts(tools: &[ToolDescriptor]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for tool in tools {
        let category = classify(&tool.name);
        match counts.iter_mut().find(|(key, _)| *key == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    counts
}

/// Render counts as `label(count), label(count)` for log lines
pub fn describe_counts(counts: &[(&str, usize)]) -> String {
    counts
        .iter()
        .map(|(category, count)| format!("{}({})", label(category), count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(classify("xiaohongshu_web_search_notes"), "xiaohongshu");
        assert_eq!(classify("tiktok_user"), "tiktok");
        assert_eq!(classify("health_check"), "health");
        assert_eq!(classify("lemon8_feed"), "lemon8");
    }

    #[test]
    fn test_known_prefix_beats_separator() {
        // "tiktokshop" would split to itself, but the known prefix matches first
        assert_eq!(classify("tiktokshop_product"), "tiktok");
        assert_eq!(classify("tikhubx"), "tikhub");
    }

    #[test]
    fn test_separator_fallback() {
        assert_eq!(classify("bilibili_fetch_video"), "bilibili");
        assert_eq!(classify("unknown_x"), "unknown");
    }

    #[test]
    fn test_no_usable_separator() {
        assert_eq!(classify("ping"), "ping");
        assert_eq!(classify("_leading"), "_leading");
        assert_eq!(classify(""), "");
    }

    #[test]
    fn test_prefix_table_is_ordered_without_shadowing() {
        // No entry may be shadowed by an earlier, shorter prefix
        for (i, (later, _)) in CATEGORIES.iter().enumerate() {
            for (earlier, _) in &CATEGORIES[..i] {
                assert!(!later.starts_with(earlier), "{} is shadowed by {}", later, earlier);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label("xiaohongshu"), "小红书");
        assert_eq!(label("twitter"), "Twitter/X");
        assert_eq!(label("bilibili"), "bilibili");
        assert!(is_known("weibo"));
        assert!(!is_known("bilibili"));
    }

    #[test]
    fn test_category_counts_first_seen_order() {
        let tools = vec![
            ToolDescriptor::new("tiktok_user", ""),
            ToolDescriptor::new("douyin_video", ""),
            ToolDescriptor::new("tiktok_post", ""),
            ToolDescriptor::new("bilibili_video", ""),
        ];

        let counts = category_counts(&tools);

        assert_eq!(counts, vec![("tiktok", 2), ("douyin", 1), ("bilibili", 1)]);
        assert_eq!(describe_counts(&counts), "TikTok(2), 抖音(1), bilibili(1)");
    }
}
