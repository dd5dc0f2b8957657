use std::io::ErrorKind;
use std::sync::Arc;

use tokio::sync::Notify;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() {
    // Startup errors are reported, not propagated; there is no state to
    // unwind and the message is the whole story.
    if let Err(e) = run() {
        logger::log_error(&e.to_string());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Single-threaded on purpose: one request is fully answered before the
    // next connection is accepted.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let root = cfg.resolve_root()?;

    let listener = match server::bind_listener(addr) {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            logger::log_port_in_use(cfg.server.port);
            return Ok(());
        }
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Ok(());
        }
    };

    let local_url = format!("http://localhost:{}", cfg.server.port);
    let network_url = format!("http://{}:{}", server::addr::local_ip(), cfg.server.port);
    logger::log_server_start(&root, &local_url, &network_url);

    if cfg.startup.open_browser {
        server::browser::open_in_browser(&local_url);
    }

    let ctx = Arc::new(handler::ServerContext::new(root, &cfg.content));
    let shutdown = Arc::new(Notify::new());
    server::shutdown::spawn_shutdown_watcher(Arc::clone(&shutdown));

    server::run_accept_loop(listener, ctx, shutdown).await;
    Ok(())
}
