use rda_calculator::config::AppConfig;
use rda_calculator::domain::logging::LogLevel;

#[test]
fn no_overrides_keep_defaults() {
    let base = AppConfig::production();
    assert_eq!(base.with_overrides(None, None), base);
}

#[test]
fn bare_debug_flag_enables_console() {
    let config = AppConfig::production().with_overrides(Some(""), None);
    assert!(config.debug_console);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn debug_can_be_switched_off() {
    let config = AppConfig::development().with_overrides(Some("off"), None);
    assert!(!config.debug_console);
}

#[test]
fn log_level_is_case_insensitive() {
    let config = AppConfig::production().with_overrides(Some("1"), Some("TRACE"));
    assert_eq!(config.log_level, LogLevel::Trace);
    assert!(config.debug_console);
}

#[test]
fn bad_values_are_ignored() {
    let base = AppConfig::development();
    assert_eq!(base.with_overrides(Some("maybe"), Some("loud")), base);
}
