/// Browser-backed log sink and clock
pub mod services {
    use crate::domain::{
        logging::{LogLevel, LogRecord, LogSink},
        time::{Clock, TimeOfDay},
    };
    use crate::time_utils;
    use wasm_bindgen::JsValue;

    /// Writes records to the browser devtools console at or above `min_level`.
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }

        /// Formats a record against the current browser time.
        pub fn render(&self, record: &LogRecord) -> String {
            record.format_line(&time_utils::format_log_timestamp(time_utils::now_millis()))
        }

        pub fn write_line(&self, level: LogLevel, line: &str) {
            let line = JsValue::from_str(line);
            match level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
                LogLevel::Info => web_sys::console::info_1(&line),
                LogLevel::Warn => web_sys::console::warn_1(&line),
            }
        }
    }

    impl LogSink for ConsoleLogger {
        fn accepts(&self, level: LogLevel) -> bool {
            level >= self.min_level
        }

        fn write(&self, record: &LogRecord) {
            self.write_line(record.level, &self.render(record));
        }
    }

    /// Host wall clock, local time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserClock;

    impl BrowserClock {
        pub fn new() -> Self {
            Self
        }
    }

    impl Clock for BrowserClock {
        fn time_of_day(&self) -> TimeOfDay {
            time_utils::local_time_of_day(time_utils::now_millis())
        }
    }

}
