//! Probing engine implementation

use crate::config::ProbeConfig;
use crate::network::socket::TcpProber;
use crate::network::{PortState, ProbeReport};
use crate::scanner::{ReportSink, ScanStats};
use crate::utils::port_spec::{series_tokens, PortRange, PortSpec};

/// Sequential probing engine
///
/// Drives the prober over the port specifications in the configuration, one
/// probe at a time. Each probe owns its socket exclusively and releases it
/// before the next begins, so an N-port scan is bounded by N x timeout.
pub struct ScanEngine {
    config: ProbeConfig,
    prober: TcpProber,
}

impl ScanEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: ProbeConfig) -> crate::Result<Self> {
        config.validate()?;

        let prober = TcpProber::new(config.timeout_duration());

        Ok(Self { config, prober })
    }

    /// Run every requested mode in order: single, series, range.
    ///
    /// The modes are independent; a malformed series token never stops the
    /// remaining tokens, and a bad range string surfaces only after the
    /// earlier modes have already executed.
    pub async fn run(&self, sink: &mut dyn ReportSink) -> crate::Result<ScanStats> {
        let mut stats = ScanStats::default();

        if let Some(port) = self.config.port {
            stats.merge(&self.scan(&PortSpec::Single(port), sink).await);
        }

        if let Some(series) = self.config.series.as_deref() {
            let spec = PortSpec::Series(series_tokens(series));
            stats.merge(&self.scan(&spec, sink).await);
        }

        if let Some(range) = self.config.range.as_deref() {
            let spec = PortSpec::Range(PortRange::parse(range)?);
            stats.merge(&self.scan(&spec, sink).await);
        }

        Ok(stats)
    }

    /// Probe every port named by the specification, reporting through the sink
    pub async fn scan(&self, spec: &PortSpec, sink: &mut dyn ReportSink) -> ScanStats {
        sink.mode_started(spec);

        let mut stats = ScanStats::default();

        match spec {
            PortSpec::Single(port) => {
                self.probe_port(*port, true, &mut stats, sink).await;
            }
            PortSpec::Series(tokens) => {
                // Input order is significant; one bad token never prevents
                // probing the others.
                for token in tokens {
                    match token.parse::<u16>() {
                        Ok(port) => self.probe_port(port, true, &mut stats, sink).await,
                        Err(_) => {
                            log::warn!("series token '{}' is not a port number", token);
                            stats.malformed_tokens += 1;
                            sink.format_error(token);
                        }
                    }
                }
            }
            PortSpec::Range(range) => {
                // Closed ports are summarized by their absence in range mode.
                for port in range.iter() {
                    self.probe_port(port, false, &mut stats, sink).await;
                }
            }
        }

        log::debug!(
            "finished {:?}: {} attempts, {} open, {} closed",
            spec,
            stats.attempts,
            stats.open,
            stats.closed
        );

        stats
    }

    async fn probe_port(
        &self,
        port: u16,
        report_closed: bool,
        stats: &mut ScanStats,
        sink: &mut dyn ReportSink,
    ) {
        let open = self.prober.probe(&self.config.target, port).await;

        stats.attempts += 1;
        let state = PortState::from_probe(open);
        match state {
            PortState::Open => stats.open += 1,
            PortState::Closed => stats.closed += 1,
        }

        if open || report_closed {
            sink.port_report(&ProbeReport::new(port, state));
        }
    }
}
