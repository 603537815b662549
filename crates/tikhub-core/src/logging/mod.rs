//! Logging for the plugin: a host-supplied sink behind the `Logger` trait

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{LogLevel, Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{LogEntry, MemoryLogger};
