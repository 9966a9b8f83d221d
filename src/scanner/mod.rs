//! Scanner module containing the probing engine

pub mod engine;

use crate::network::ProbeReport;
use crate::utils::port_spec::PortSpec;
use serde::{Deserialize, Serialize};

pub use engine::ScanEngine;

/// Counters accumulated over one driver invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Probe attempts made, regardless of outcome
    pub attempts: usize,

    /// Ports that accepted a connection
    pub open: usize,

    /// Ports that refused, timed out or were unreachable
    pub closed: usize,

    /// Series tokens that failed to parse as a port number
    pub malformed_tokens: usize,
}

impl ScanStats {
    /// Fold another driver's counters into this one
    pub fn merge(&mut self, other: &ScanStats) {
        self.attempts += other.attempts;
        self.open += other.open;
        self.closed += other.closed;
        self.malformed_tokens += other.malformed_tokens;
    }
}

/// Receiver for probe outcomes, in presentation order
///
/// The engine pushes results through this as it scans instead of collecting
/// them, so range scans can surface open ports while later ports are still
/// being probed. The terminal renderer implements it; tests use collectors.
pub trait ReportSink {
    /// One probed port with its classification
    fn port_report(&mut self, report: &ProbeReport);

    /// A series token that did not parse as a port number
    fn format_error(&mut self, token: &str);

    /// A driver is about to start iterating the given specification
    fn mode_started(&mut self, _spec: &PortSpec) {}
}
