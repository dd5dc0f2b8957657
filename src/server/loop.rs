// Accept loop
//
// One connection is served to completion before the next accept. Keep-alive
// is disabled so a connection carries exactly one request, which keeps
// request handling strictly sequential with no shared mutable state.

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

use crate::handler::{self, ServerContext};
use crate::logger;

/// Serve requests until `shutdown` fires.
///
/// The listener is owned here and dropped on every exit path.
pub async fn run_accept_loop(
    listener: TcpListener,
    ctx: Arc<ServerContext>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        // An interrupt must also reach a server that is
                        // mid-connection, so the in-flight connection races
                        // the shutdown signal and is dropped if it loses.
                        tokio::select! {
                            () = serve_connection(stream, Arc::clone(&ctx)) => {}
                            _ = shutdown.notified() => break,
                        }
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    logger::log_server_stopped();
}

/// Serve a single connection inline, then return to the accept loop.
async fn serve_connection(stream: TcpStream, ctx: Arc<ServerContext>) {
    let io = TokioIo::new(stream);

    let conn = http1::Builder::new()
        .keep_alive(false)
        .serve_connection(
            io,
            service_fn(move |req| {
                let ctx = Arc::clone(&ctx);
                async move { handler::handle_request(req, ctx).await }
            }),
        );

    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
