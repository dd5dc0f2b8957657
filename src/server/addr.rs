// Local address discovery
//
// Connecting a UDP socket never sends a packet; it only asks the OS routing
// table which interface would carry traffic to the target. The socket's
// local endpoint then holds the address other devices on that network can
// reach us at.

use std::net::UdpSocket;

const PROBE_ADDR: &str = "8.8.8.8:80";

pub const FALLBACK_HOST: &str = "localhost";

/// Best-effort LAN address of this machine, for display only.
///
/// Returns `"localhost"` whenever the probe fails: no network interface, no
/// default route, or a sandbox that forbids sockets. Never fails.
pub fn local_ip() -> String {
    probe_local_ip().unwrap_or_else(|| FALLBACK_HOST.to_string())
}

fn probe_local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    let local = socket.local_addr().ok()?;
    Some(local.ip().to_string())
}
