//! portprobe - a small TCP connectivity prober
//!
//! Probes a host for open TCP ports: one port, a comma-separated series, or
//! an inclusive numeric range, each attempt bounded by a configurable timeout.

pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use config::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
pub use network::{PortState, ProbeReport};
pub use scanner::engine::ScanEngine;
pub use scanner::{ReportSink, ScanStats};
pub use utils::port_spec::{PortRange, PortSpec};

pub type Result<T> = std::result::Result<T, ProbeError>;
