//! Memoized, filtered tool catalog
//!
//! The catalog is discovered on first use and kept for the life of the
//! process. There is no refresh: once ready it stays ready.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use super::category::{category_counts, classify, describe_counts, label};
use super::filter::ToolFilter;
use crate::client::{TikHubApi, TikHubResult};
use crate::logging::Logger;
use crate::types::ToolDescriptor;
use crate::{log_error, log_info};

/// Filtered tool catalog backed by a remote API
pub struct ToolCatalog {
    api: Arc<dyn TikHubApi>,
    filter: ToolFilter,
    /// Written once, by the first successful discovery
    tools: OnceCell<Vec<ToolDescriptor>>,
    logger: Arc<dyn Logger>,
}

impl ToolCatalog {
    /// Create an empty catalog; nothing is fetched until `get_tools`
    pub fn new(api: Arc<dyn TikHubApi>, filter: ToolFilter, logger: Arc<dyn Logger>) -> Self {
        Self {
            api,
            filter,
            tools: OnceCell::new(),
            logger,
        }
    }

    /// The filter applied on discovery
    pub fn filter(&self) -> &ToolFilter {
        &self.filter
    }

    /// Get the filtered catalog, discovering it on first call
    ///
    /// Concurrent first callers share one discovery request. A failed
    /// discovery is not cached, so the next call tries again.
    pub async fn get_tools(&self) -> TikHubResult<&[ToolDescriptor]> {
        self.tools
            .get_or_try_init(|| self.discover())
            .await
            .map(Vec::as_slice)
    }

    /// The catalog if discovery has already succeeded
    pub fn cached(&self) -> Option<&[ToolDescriptor]> {
        self.tools.get().map(Vec::as_slice)
    }

    /// Whether discovery has completed successfully
    pub fn is_ready(&self) -> bool {
        self.tools.initialized()
    }

    /// Look up a discovered tool by its remote name
    pub async fn find(&self, name: &str) -> TikHubResult<Option<&ToolDescriptor>> {
        Ok(self.get_tools().await?.iter().find(|t| t.name == name))
    }

    /// Grouped listing of the catalog, optionally narrowed to one category
    pub async fn summary(&self, category: Option<&str>) -> TikHubResult<CatalogSummary> {
        let tools = self.get_tools().await?;
        Ok(CatalogSummary::build(tools, category))
    }

    async fn discover(&self) -> TikHubResult<Vec<ToolDescriptor>> {
        let all = self.api.list_tools().await.map_err(|e| {
            log_error!(self.logger, "Failed to fetch tool list: {}", e);
            e
        })?;
        log_info!(self.logger, "Fetched {} tools", all.len());

        let tools = self.filter.apply(all);
        log_info!(
            self.logger,
            "Loaded {} tools, categories: {}",
            tools.len(),
            describe_counts(&category_counts(&tools))
        );

        Ok(tools)
    }
}

/// Group tools by category label
///
/// Groups appear in order of first appearance and keep catalog order inside.
pub fn group_by_label<'a>(
    tools: impl IntoIterator<Item = &'a ToolDescriptor>,
) -> Vec<(&'a str, Vec<&'a ToolDescriptor>)> {
    let mut groups: Vec<(&'a str, Vec<&'a ToolDescriptor>)> = Vec::new();

    for tool in tools {
        let group = label(classify(&tool.name));
        match groups.iter_mut().find(|(existing, _)| *existing == group) {
            Some((_, members)) => members.push(tool),
            None => groups.push((group, vec![tool])),
        }
    }

    groups
}

/// Listing returned by the generic list tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Number of tools listed
    pub total: usize,
    /// Label -> `[{name, description}]`, in first-seen order
    pub tools: Map<String, Value>,
    /// Hint telling the agent how to invoke a listed tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl CatalogSummary {
    /// Build a summary; `category` narrows to an exact category key
    pub fn build(tools: &[ToolDescriptor], category: Option<&str>) -> Self {
        let selected: Vec<&ToolDescriptor> = tools
            .iter()
            .filter(|t| category.map_or(true, |c| classify(&t.name) == c))
            .collect();

        let mut grouped = Map::new();
        for (group, members) in group_by_label(selected.iter().copied()) {
            let entries = members
                .into_iter()
                .map(|t| serde_json::json!({ "name": t.name, "description": t.description }))
                .collect();
            grouped.insert(group.to_string(), Value::Array(entries));
        }

        Self {
            total: selected.len(),
            tools: grouped,
            usage: None,
        }
    }

    /// Attach a usage hint
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Render as JSON
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
