//! Calculator log records and the single sink they are routed to.
//!
//! Until a sink is installed every record is dropped, so domain code can log
//! freely under native tests.

use derive_more::Display;
use std::sync::OnceLock;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "trace")]
    Trace,
    #[display(fmt = "debug")]
    Debug,
    #[display(fmt = "info")]
    Info,
    #[display(fmt = "warn")]
    Warn,
}

/// Part of the calculator a record is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogScope {
    #[display(fmt = "calculator")]
    Calculator,
    #[display(fmt = "history")]
    History,
    #[display(fmt = "startup")]
    Startup,
    #[display(fmt = "debug-console")]
    DebugConsole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub scope: LogScope,
    pub message: String,
    /// Extra structured context, JSON when present.
    pub metadata: Option<String>,
}

impl LogRecord {
    /// `12:00:01.250 info [history] Milk: 1 / 2 = 50.0% RDA {"id":0,...}`
    pub fn format_line(&self, stamp: &str) -> String {
        let mut line = format!("{} {} [{}] {}", stamp, self.level, self.scope, self.message);
        if let Some(metadata) = &self.metadata {
            line.push(' ');
            line.push_str(metadata);
        }
        line
    }
}

/// Destination for records: the devtools console, optionally mirrored on the page.
pub trait LogSink: Send + Sync {
    fn accepts(&self, level: LogLevel) -> bool;
    fn write(&self, record: &LogRecord);
}

static SINK: OnceLock<Box<dyn LogSink>> = OnceLock::new();

/// Returns `false` if a sink was already installed; the first one stays.
pub fn install_sink(sink: Box<dyn LogSink>) -> bool {
    SINK.set(sink).is_ok()
}

pub fn emit(level: LogLevel, scope: LogScope, message: String, metadata: Option<String>) {
    let Some(sink) = SINK.get() else {
        return;
    };
    if sink.accepts(level) {
        sink.write(&LogRecord { level, scope, message, metadata });
    }
}

/// Compiled out of release builds.
#[macro_export]
macro_rules! log_trace {
    ($scope:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $scope, format!($($arg)*), None);
        }
    };
}

/// Compiled out of release builds.
#[macro_export]
macro_rules! log_debug {
    ($scope:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $scope, format!($($arg)*), None);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($scope:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $scope, format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($scope:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $scope, format!($($arg)*), None)
    };
}
