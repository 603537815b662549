//! Category allow-list and count cap

use super::category::classify;
use crate::config::PluginConfig;
use crate::types::ToolDescriptor;

/// Narrows the remote catalog to what the host should see
///
/// Applied in a fixed order: category allow-list first, then the count cap.
/// Catalog order is preserved throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    /// Category keys or name prefixes; empty disables the allow-list
    pub enabled_categories: Vec<String>,
    /// Maximum number of tools kept; zero or negative disables the cap
    pub max_tools: i64,
}

impl ToolFilter {
    /// A filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter described by the plugin configuration
    pub fn from_config(config: &PluginConfig) -> Self {
        Self {
            enabled_categories: config.enabled_categories.clone(),
            max_tools: config.max_tools,
        }
    }

    /// Only keep tools in these categories (or with these name prefixes)
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enabled_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Keep at most `max_tools` tools
    pub fn with_max_tools(mut self, max_tools: i64) -> Self {
        self.max_tools = max_tools;
        self
    }

    /// Check a single tool against the category allow-list
    ///
    /// An entry matches when it equals the tool's category or is a prefix of
    /// the raw tool name, so both `tiktok` and `tiktok_user` work as entries.
    pub fn matches(&self, tool: &ToolDescriptor) -> bool {
        if self.enabled_categories.is_empty() {
            return true;
        }

        let category = classify(&tool.name);
        self.enabled_categories
            .iter()
            .any(|enabled| category == enabled.as_str() || tool.name.starts_with(enabled.as_str()))
    }

    /// The cap as a length, if one applies
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.max_tools).ok().filter(|&max| max > 0)
    }

    /// Apply the allow-list, then the cap
    pub fn apply(&self, tools: Vec<ToolDescriptor>) -> Vec<ToolDescriptor> {
        let mut filtered: Vec<ToolDescriptor> = if self.enabled_categories.is_empty() {
            tools
        } else {
            tools.into_iter().filter(|t| self.matches(t)).collect()
        };

        if let Some(max) = self.limit() {
            filtered.truncate(max);
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<ToolDescriptor> {
        names.iter().map(|n| ToolDescriptor::new(*n, "")).collect()
    }

    fn names(tools: &[ToolDescriptor]) -> Vec<&str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_category_filter_scenario() {
        let filter = ToolFilter::new().with_categories(["tiktok"]).with_max_tools(10);

        let result = filter.apply(tools(&["xiaohongshu_search", "tiktok_user", "unknown_x"]));

        assert_eq!(names(&result), vec!["tiktok_user"]);
    }

    #[test]
    fn test_empty_categories_keep_everything() {
        let filter = ToolFilter::new().with_max_tools(0);
        let input = tools(&["a_1", "b_2", "c_3"]);

        assert_eq!(filter.apply(input.clone()), input);
    }

    #[test]
    fn test_name_prefix_entry() {
        let filter = ToolFilter::new().with_categories(["douyin_web"]);

        let result = filter.apply(tools(&["douyin_web_video", "douyin_app_video", "tiktok_web"]));

        assert_eq!(names(&result), vec!["douyin_web_video"]);
    }

    #[test]
    fn test_fallback_category_entry() {
        let filter = ToolFilter::new().with_categories(["bilibili", "health"]);

        let result = filter.apply(tools(&["bilibili_video", "health_check", "weibo_search"]));

        assert_eq!(names(&result), vec!["bilibili_video", "health_check"]);
    }

    #[test]
    fn test_order_preserved() {
        let filter = ToolFilter::new().with_categories(["weibo", "tiktok"]);

        let result = filter.apply(tools(&["tiktok_b", "weibo_a", "douyin_c", "tiktok_a"]));

        assert_eq!(names(&result), vec!["tiktok_b", "weibo_a", "tiktok_a"]);
    }

    #[test]
    fn test_cap_keeps_first_k() {
        let filter = ToolFilter::new().with_max_tools(2);

        let result = filter.apply(tools(&["z_1", "a_2", "m_3", "b_4"]));

        assert_eq!(names(&result), vec!["z_1", "a_2"]);
    }

    #[test]
    fn test_cap_applies_after_categories() {
        let filter = ToolFilter::new().with_categories(["tiktok"]).with_max_tools(1);

        let result = filter.apply(tools(&["douyin_a", "tiktok_b", "tiktok_c"]));

        assert_eq!(names(&result), vec!["tiktok_b"]);
    }

    #[test]
    fn test_non_positive_cap_is_unlimited() {
        let input = tools(&["a_1", "b_2", "c_3"]);

        for max in [0, -1, i64::MIN] {
            let filter = ToolFilter::new().with_max_tools(max);
            assert_eq!(filter.limit(), None);
            assert_eq!(filter.apply(input.clone()).len(), 3);
        }
    }

    #[test]
    fn test_cap_larger_than_catalog() {
        let filter = ToolFilter::new().with_max_tools(100);
        assert_eq!(filter.apply(tools(&["a_1", "b_2"])).len(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = PluginConfig::new("tok").with_categories(["tiktok"]).with_max_tools(5);
        let filter = ToolFilter::from_config(&config);

        assert_eq!(filter.enabled_categories, vec!["tiktok"]);
        assert_eq!(filter.limit(), Some(5));
    }
}
