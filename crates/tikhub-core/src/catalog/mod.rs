//! Tool discovery, categorization and filtering
//!
//! ```text
//! GET /tools ──► ToolFilter (categories, then cap) ──► ToolCatalog (memoized)
//!                      │
//!                 classify(name) ──► label ──► grouped listings
//! ```

mod category;
mod filter;
mod registry;

pub use category::{
    category_counts, classify, describe_counts, is_known, label, CATEGORIES, SEPARATOR,
};
pub use filter::ToolFilter;
pub use registry::{group_by_label, CatalogSummary, ToolCatalog};
