//! Host plugin runtime interface
//!
//! The host hands the plugin a registrar; the plugin registers `HostTool`s,
//! each carrying an async `ToolExecutor` the host calls later.

mod traits;
mod memory;

pub use traits::{HostTool, ToolContent, ToolExecutor, ToolOutput, ToolRegistrar};
pub use memory::MemoryRegistrar;
