//! Engine-level tests for the three probing modes

use portprobe::utils::port_spec::{PortRange, PortSpec};
use portprobe::{PortState, ProbeConfig, ProbeReport, ReportSink, ScanEngine};
use std::net::TcpListener;

#[derive(Default)]
struct CollectingSink {
    reports: Vec<ProbeReport>,
    bad_tokens: Vec<String>,
}

impl ReportSink for CollectingSink {
    fn port_report(&mut self, report: &ProbeReport) {
        self.reports.push(*report);
    }

    fn format_error(&mut self, token: &str) {
        self.bad_tokens.push(token.to_string());
    }
}

fn bound_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn single_mode_reports_open() {
    let (_listener, open_port) = bound_listener();

    let config = ProbeConfig::new("127.0.0.1".to_string())
        .with_port(open_port)
        .with_timeout(500);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let stats = engine.run(&mut sink).await.unwrap();

    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.open, 1);
    assert_eq!(
        sink.reports,
        vec![ProbeReport::new(open_port, PortState::Open)]
    );
}

#[tokio::test]
async fn single_mode_reports_closed() {
    let closed_port = free_port();

    let config = ProbeConfig::new("127.0.0.1".to_string())
        .with_port(closed_port)
        .with_timeout(500);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let stats = engine.run(&mut sink).await.unwrap();

    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.closed, 1);
    assert_eq!(
        sink.reports,
        vec![ProbeReport::new(closed_port, PortState::Closed)]
    );
}

#[tokio::test]
async fn series_recovers_from_malformed_tokens() {
    let (_listener, open_port) = bound_listener();
    let closed_port = free_port();

    let config = ProbeConfig::new("127.0.0.1".to_string())
        .with_series(format!("{},abc,{}", open_port, closed_port))
        .with_timeout(500);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let stats = engine.run(&mut sink).await.unwrap();

    // One notice for the bad token, both good tokens still probed, in order.
    assert_eq!(sink.bad_tokens, vec!["abc".to_string()]);
    assert_eq!(stats.attempts, 2);
    assert_eq!(stats.malformed_tokens, 1);
    assert_eq!(
        sink.reports,
        vec![
            ProbeReport::new(open_port, PortState::Open),
            ProbeReport::new(closed_port, PortState::Closed),
        ]
    );
}

#[tokio::test]
async fn range_mode_reports_only_open_ports() {
    let (_listener, open_port) = bound_listener();

    let spec = PortSpec::Range(PortRange {
        start: open_port - 1,
        end: open_port + 1,
    });
    let config = ProbeConfig::new("127.0.0.1".to_string()).with_timeout(300);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let stats = engine.scan(&spec, &mut sink).await;

    // Every port in the range is attempted, closed ports stay silent.
    assert_eq!(stats.attempts, 3);
    assert!(sink.reports.iter().all(|r| r.state.is_open()));
    assert!(sink.reports.iter().any(|r| r.port == open_port));
    assert!(sink.bad_tokens.is_empty());
}

#[tokio::test]
async fn range_attempts_cover_every_port_inclusive() {
    let config = ProbeConfig::new("127.0.0.1".to_string())
        .with_range("20-25".to_string())
        .with_timeout(300);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let stats = engine.run(&mut sink).await.unwrap();

    assert_eq!(stats.attempts, 6);
    assert_eq!(stats.open + stats.closed, 6);
}

#[tokio::test]
async fn range_format_error_does_not_suppress_other_modes() {
    let (_listener, open_port) = bound_listener();

    let config = ProbeConfig::new("127.0.0.1".to_string())
        .with_port(open_port)
        .with_range("1-2-3".to_string())
        .with_timeout(500);
    let engine = ScanEngine::new(config).unwrap();

    let mut sink = CollectingSink::default();
    let result = engine.run(&mut sink).await;

    // The single-port mode already ran before the range string was rejected.
    assert!(result.is_err());
    assert_eq!(
        sink.reports,
        vec![ProbeReport::new(open_port, PortState::Open)]
    );
}

#[test]
fn engine_rejects_empty_target() {
    let config = ProbeConfig::default().with_port(80);
    assert!(ScanEngine::new(config).is_err());
}
