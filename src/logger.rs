//! Console logging.
//!
//! Lifecycle messages go to stdout, warnings and errors to stderr with a
//! local timestamp. There is no per-request access log; the console surface
//! is the startup banner, the shutdown line, and whatever goes wrong.

use std::net::SocketAddr;
use std::path::Path;

use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(root: &Path, local_url: &str, network_url: &str) {
    println!("============================================================");
    println!("lanserve started");
    println!("============================================================");
    println!();
    println!("Serving directory: {}", root.display());
    println!();
    println!("Local access:   {local_url}");
    println!("Network access: {network_url}");
    println!();
    println!("Access from other devices:");
    println!("  - Make sure they are on the same Wi-Fi network");
    println!("  - Open a browser and go to: {network_url}");
    println!();
    println!("Press Ctrl+C to stop the server");
    println!("============================================================");
}

pub fn log_server_stopped() {
    println!("\nServer stopped.");
}

pub fn log_port_in_use(port: u16) {
    eprintln!("\n[{}] [ERROR] Port {port} is already in use.", timestamp());
    eprintln!("         Close the other application or pick a different port in lanserve.toml");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    log_error(&format!("Failed to bind {addr}: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}
