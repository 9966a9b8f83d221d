//! Host resolution for the pre-scan address display

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::net::IpAddr;
use tokio::net::lookup_host;

/// Resolve a host identifier to its IP addresses.
///
/// The prober itself hands the raw host string to the connect call and lets
/// the platform resolve it; this lookup exists so the run can show the
/// addresses up front and abort before probing when the host does not
/// resolve at all.
pub async fn resolve_host(host: &str) -> Result<Vec<IpAddr>> {
    let socket_addrs = lookup_host((host, 0u16))
        .await
        .with_context(|| format!("Failed to resolve hostname '{}'", host))?;

    let mut addresses = Vec::new();
    let mut seen = HashSet::new();

    for socket_addr in socket_addrs {
        let ip = socket_addr.ip();
        if seen.insert(ip) {
            addresses.push(ip);
        }
    }

    if addresses.is_empty() {
        return Err(anyhow::anyhow!(
            "No IP addresses resolved for hostname '{}'",
            host
        ));
    }

    Ok(addresses)
}
