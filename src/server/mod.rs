// Server module entry point
// Listener construction, the accept loop, interrupt handling, and the
// startup helpers (address discovery, browser launch).

pub mod addr;
pub mod browser;
pub mod listener;
pub mod shutdown;

// `loop` is a keyword, so the file is mounted under another module name
#[path = "loop.rs"]
pub mod accept_loop;

pub use accept_loop::run_accept_loop;
pub use listener::bind_listener;
