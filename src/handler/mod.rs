// Request handling module
// Dispatch plus the static file responder behind it.

pub mod router;
pub mod static_files;

pub use router::handle_request;

use std::path::PathBuf;

use crate::config::ContentConfig;

/// Immutable serving context shared by all requests.
pub struct ServerContext {
    /// Canonicalized content root; every served path must stay under it
    pub root: PathBuf,
    /// Files tried, in order, when a directory is requested
    pub index_files: Vec<String>,
    /// Whether directories without an index file get a generated listing
    pub directory_listing: bool,
}

impl ServerContext {
    /// `root` must already be canonicalized (see `Config::resolve_root`).
    pub fn new(root: PathBuf, content: &ContentConfig) -> Self {
        Self {
            root,
            index_files: content.index_files.clone(),
            directory_listing: content.directory_listing,
        }
    }
}
