//! StdoutObserver - timestamped log lines on standard output.

use chrono::{DateTime, Local};

use crate::ports::{Event, Observer};

pub const DEFAULT_PREFIX: &str = "[Task] ";

/// Writes `YYYY/MM/DD HH:MM:SS <prefix><event>` per event.
#[derive(Debug, Clone)]
pub struct StdoutObserver {
    prefix: String,
}

impl StdoutObserver {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn render(&self, event: &Event<'_>, at: DateTime<Local>) -> String {
        format!("{} {}{}", at.format("%Y/%m/%d %H:%M:%S"), self.prefix, event)
    }
}

impl Default for StdoutObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for StdoutObserver {
    fn notify(&self, event: &Event<'_>) {
        println!("{}", self.render(event, Local::now()));
    }
}
