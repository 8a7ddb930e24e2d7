use std::str::FromStr;

use crate::domain::logging::LogLevel;

/// Runtime switches for the page.
///
/// Defaults follow the build profile; the page URL can override them with
/// `?debug`, `?debug=off` and `?log=<level>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub debug_console: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }
}

impl AppConfig {
    pub fn development() -> Self {
        Self { log_level: LogLevel::Debug, debug_console: true }
    }

    pub fn production() -> Self {
        Self { log_level: LogLevel::Info, debug_console: false }
    }

    /// Applies the `debug` and `log` overrides on top of `self`.
    ///
    /// `Some("")` is a bare `?debug`. Unparseable values leave the
    /// corresponding setting alone.
    pub fn with_overrides(mut self, debug: Option<&str>, log: Option<&str>) -> Self {
        if let Some(enabled) = debug.and_then(parse_switch) {
            self.debug_console = enabled;
        }
        if let Some(level) = log.and_then(|value| LogLevel::from_str(value).ok()) {
            self.log_level = level;
        }
        self
    }

    /// Applies overrides from a URL query string, with or without its leading
    /// `?`. Values are percent-decoded by the browser.
    pub fn apply_query(self, query: &str) -> Self {
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(query) else {
            return self;
        };
        let debug = params.get("debug");
        let log = params.get("log");
        self.with_overrides(debug.as_deref(), log.as_deref())
    }

    /// Reads overrides from the current page URL.
    pub fn from_location() -> Self {
        let query = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::default().apply_query(&query)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
