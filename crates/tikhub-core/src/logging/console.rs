//! Console logger implementation

use super::traits::{LogLevel, Logger};

/// A logger that outputs to the console (stdout/stderr)
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with the `[TikHub]` prefix
    pub fn new() -> Self {
        Self {
            prefix: "[TikHub]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Debug, message));
    }

    fn info(&self, message: &str) {
        println!("{}", self.line(LogLevel::Info, message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Warn, message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line(LogLevel::Error, message));
    }
}
