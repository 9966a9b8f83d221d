//! Configuration tests

use portprobe::ProbeConfig;
use std::time::Duration;

#[test]
fn default_timeout_is_100ms() {
    let config = ProbeConfig::default();
    assert_eq!(config.timeout, 100);
    assert_eq!(config.timeout_duration(), Duration::from_millis(100));
}

#[test]
fn validate_rejects_empty_target() {
    assert!(ProbeConfig::default().validate().is_err());
    assert!(ProbeConfig::new("127.0.0.1".to_string()).validate().is_ok());
}

#[test]
fn builders_set_modes_and_timeout() {
    let config = ProbeConfig::new("example.com".to_string())
        .with_port(80)
        .with_series("22,443".to_string())
        .with_range("1-10".to_string())
        .with_timeout(250);

    assert_eq!(config.target, "example.com");
    assert_eq!(config.port, Some(80));
    assert_eq!(config.series.as_deref(), Some("22,443"));
    assert_eq!(config.range.as_deref(), Some("1-10"));
    assert_eq!(config.timeout_duration(), Duration::from_millis(250));
}

#[test]
fn default_config_has_no_modes() {
    let config = ProbeConfig::default();
    assert!(config.port.is_none());
    assert!(config.series.is_none());
    assert!(config.range.is_none());
}
