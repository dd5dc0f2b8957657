// Configuration module entry point
// Loads settings from lanserve.toml and LANSERVE_* environment variables,
// with built-in defaults for everything.

mod types;

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub use types::{Config, ContentConfig, ServerConfig, StartupConfig};

impl Config {
    /// Load configuration from the default file name
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("lanserve")
    }

    /// Load configuration from the given file path (without extension).
    /// The file is optional; defaults cover every setting.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("LANSERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("content.directory_listing", true)?
            .set_default("startup.open_browser", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }

    /// Resolve and canonicalize the directory to serve.
    ///
    /// With no configured root, this is the directory containing the server
    /// executable, so dropping the binary into a folder shares that folder.
    pub fn resolve_root(&self) -> io::Result<PathBuf> {
        let root = match &self.content.root {
            Some(path) => PathBuf::from(path),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "executable has no parent directory",
                    )
                })?
            }
        };
        root.canonicalize()
    }
}
