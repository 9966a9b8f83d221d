//! Port specification parsing
//!
//! Three input shapes drive the prober: a single port, a comma-separated
//! series of port tokens, and an inclusive numeric range. The series keeps
//! its tokens raw so a malformed entry can be reported on its own without
//! discarding the rest of the list.

use crate::error::ProbeError;
use serde::{Deserialize, Serialize};

/// One of the three shapes of port input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    /// One literal port
    Single(u16),
    /// Ordered sequence of port tokens as supplied, possibly malformed
    Series(Vec<String>),
    /// Inclusive ascending range
    Range(PortRange),
}

/// Inclusive port range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    /// Parse a `"<min>-<max>"` range string.
    ///
    /// Exactly two dash-separated integer components are accepted, and the
    /// bounds are not reordered: `min > max` is an input error, not a swap.
    pub fn parse(spec: &str) -> crate::Result<Self> {
        let parts: Vec<&str> = spec.split('-').collect();
        if parts.len() != 2 {
            return Err(ProbeError::PortSpec(format!(
                "Invalid range '{}': format must be <min>-<max> (example: 1-999)",
                spec
            )));
        }

        let start: u16 = parts[0].trim().parse().map_err(|_| {
            ProbeError::PortSpec(format!("Invalid start port '{}' in range '{}'", parts[0], spec))
        })?;
        let end: u16 = parts[1].trim().parse().map_err(|_| {
            ProbeError::PortSpec(format!("Invalid end port '{}' in range '{}'", parts[1], spec))
        })?;

        if start > end {
            return Err(ProbeError::PortSpec(format!(
                "Start port {} cannot be greater than end port {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// Number of ports in the range
    pub fn count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Ports in ascending order
    pub fn iter(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Split a comma-separated series into trimmed tokens, preserving input order.
///
/// Malformed entries are kept; the driver reports them individually at probe
/// time.
pub fn series_tokens(spec: &str) -> Vec<String> {
    spec.split(',').map(|token| token.trim().to_string()).collect()
}
