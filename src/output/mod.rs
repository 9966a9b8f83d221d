//! Output formatting and management

use crate::network::{PortState, ProbeReport};
use crate::scanner::{ReportSink, ScanStats};
use crate::utils::port_spec::PortSpec;
use colored::*;
use std::net::IpAddr;
use std::time::Duration;

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub colored: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

/// Terminal renderer for probe results
///
/// Implements the engine's report sink: per-port OPEN/CLOSED lines, token
/// format notices and mode headers, in the order the engine produces them.
pub struct OutputManager {
    pub config: OutputConfig,
}

impl OutputManager {
    pub fn new(config: OutputConfig) -> Self {
        if !config.colored {
            colored::control::set_override(false);
        }

        Self { config }
    }

    /// Show the addresses the target resolved to
    pub fn print_resolution(&self, host: &str, addresses: &[IpAddr]) {
        for ip in addresses {
            println!(
                "{} {} {} {}",
                "[~]".bright_blue(),
                host.bright_white().bold(),
                "resolves to".bright_blue(),
                ip.to_string().bright_cyan()
            );
        }
    }

    /// Echo the effective probe timeout
    pub fn print_timeout(&self, timeout: Duration) {
        println!(
            "{} {}",
            "[~] Timeout set to".bright_blue(),
            format!("{:.3}s", timeout.as_secs_f64()).bright_cyan()
        );
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self, stats: &ScanStats, elapsed: Duration) {
        if stats.attempts == 0 {
            return;
        }

        println!();
        println!(
            "{} {} probed, {} open, {} closed in {}",
            "[~] Scan complete:".bright_blue(),
            stats.attempts.to_string().bright_white().bold(),
            stats.open.to_string().bright_green().bold(),
            stats.closed.to_string().bright_red().bold(),
            format!("{:.2}s", elapsed.as_secs_f64()).bright_yellow()
        );
    }
}

impl ReportSink for OutputManager {
    fn port_report(&mut self, report: &ProbeReport) {
        match report.state {
            PortState::Open => println!(
                "{} {}",
                format!("[+] Port {} :", report.port).bright_cyan(),
                "OPEN".bright_green().bold()
            ),
            PortState::Closed => println!(
                "{} {}",
                format!("[-] Port {} :", report.port).bright_cyan(),
                "CLOSED".bright_red().bold()
            ),
        }
    }

    fn format_error(&mut self, token: &str) {
        println!(
            "{} {} {}",
            "[!]".bright_yellow(),
            token.bright_white().bold(),
            "is not a port. Check input.".bright_yellow()
        );
    }

    fn mode_started(&mut self, spec: &PortSpec) {
        match spec {
            PortSpec::Single(_) => {}
            PortSpec::Series(_) => {
                println!("{}", "Scanning series of ports:".bright_magenta().bold());
                println!("{}", "-------------------------".bright_magenta());
            }
            PortSpec::Range(range) => {
                println!(
                    "{} {}",
                    "Port range set to".bright_magenta().bold(),
                    range.to_string().bright_cyan().bold()
                );
            }
        }
    }
}
