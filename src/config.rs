//! Runtime configuration loaded from the environment

use std::env;
use std::path::PathBuf;

use crate::types::MAX_RETAINED;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind (default: "0.0.0.0")
    pub host: String,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// History snapshot file (default: "./qr-history.json")
    pub history_file: PathBuf,

    /// Directory generated images are written to and served from
    pub images_dir: PathBuf,

    /// Static site root served at `/`
    pub public_dir: PathBuf,

    /// History retention bound
    pub max_history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            history_file: PathBuf::from("qr-history.json"),
            images_dir: PathBuf::from("public").join("images"),
            public_dir: PathBuf::from("public"),
            max_history: MAX_RETAINED,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PORT`: listen port (default: 3000)
    /// - `QR_BIND_HOST`: bind host (default: "0.0.0.0")
    /// - `QR_HISTORY_FILE`: history snapshot path (default: "qr-history.json")
    /// - `QR_IMAGES_DIR`: image output directory (default: "public/images")
    /// - `QR_PUBLIC_DIR`: static files directory (default: "public")
    /// - `QR_MAX_HISTORY`: retention bound (default: 50)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{}'", port))?,
            Err(_) => defaults.port,
        };

        let max_history = match env::var("QR_MAX_HISTORY") {
            Ok(max) => {
                let max: usize = max
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("QR_MAX_HISTORY must be a number, got '{}'", max))?;
                if max == 0 {
                    anyhow::bail!("QR_MAX_HISTORY must be at least 1");
                }
                max
            }
            Err(_) => defaults.max_history,
        };

        Ok(Self {
            host: env::var("QR_BIND_HOST").unwrap_or(defaults.host),
            port,
            history_file: env::var("QR_HISTORY_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_file),
            images_dir: env::var("QR_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            public_dir: env::var("QR_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            max_history,
        })
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
