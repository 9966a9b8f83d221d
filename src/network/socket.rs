//! TCP connect probing

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// TCP connect prober
///
/// One bounded connection attempt per call; the connection is dropped as
/// soon as the handshake completes. Stateless across calls.
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Attempt a TCP connection to `host:port` within the timeout.
    ///
    /// Returns `true` if the handshake completed. Hostname resolution happens
    /// inside the connect call, so a DNS failure reads as a closed port, the
    /// same as refusal or an elapsed timeout.
    pub async fn probe(&self, host: &str, port: u16) -> bool {
        log::debug!("probing {}:{} (timeout {:?})", host, port, self.timeout);

        match timeout(self.timeout, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => {
                // Connection successful - close immediately
                drop(stream);
                true
            }
            Ok(Err(_)) => false, // Connection failed - port is closed
            Err(_) => false,     // Timeout - consider port closed
        }
    }

    /// The timeout this prober was constructed with
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
