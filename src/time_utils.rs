use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::time::TimeOfDay;

/// Milliseconds since the Unix epoch from the browser clock.
pub fn now_millis() -> u64 {
    Date::now() as u64
}

/// Local wall-clock time of day for a millisecond timestamp.
pub fn local_time_of_day(timestamp: u64) -> TimeOfDay {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    let seconds = date.get_hours() * 3600 + date.get_minutes() * 60 + date.get_seconds();
    TimeOfDay::from_seconds(seconds)
}

/// `HH:MM:SS.mmm` in local time, used for log lines.
pub fn format_log_timestamp(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}
