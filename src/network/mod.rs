//! Network types for probe classification

pub mod socket;

use serde::{Deserialize, Serialize};

/// Port state classification
///
/// Every connection failure collapses into `Closed`: refusal, unreachable
/// host, DNS error, or an elapsed timeout all look the same to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortState {
    Open,
    Closed,
}

impl PortState {
    /// Classify a probe outcome
    pub fn from_probe(open: bool) -> Self {
        if open {
            PortState::Open
        } else {
            PortState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PortState::Open)
    }
}

impl std::fmt::Display for PortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortState::Open => write!(f, "open"),
            PortState::Closed => write!(f, "closed"),
        }
    }
}

/// Probe result for a single port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub port: u16,
    pub state: PortState,
}

impl ProbeReport {
    pub fn new(port: u16, state: PortState) -> Self {
        Self { port, state }
    }
}
