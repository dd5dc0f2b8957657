// Configuration types
// All values are fixed at process start and never mutated afterwards.

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub startup: StartupConfig,
}

/// Listening socket configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// What gets served and how directories are handled
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Directory to serve. Defaults to the directory holding the server
    /// binary when unset.
    pub root: Option<String>,
    /// Files tried, in order, when a directory is requested
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
    /// Generate an HTML listing for directories without an index file
    pub directory_listing: bool,
}

/// One-shot startup behavior
#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    pub open_browser: bool,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}
