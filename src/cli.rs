//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{load_config, validate_config, ConfigError, QrServConfig};

/// Serve QR codes for arbitrary strings over HTTP.
#[derive(Debug, Parser)]
#[command(name = "qrserv", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "QRSERV_CONFIG")]
    pub config: Option<PathBuf>,

    /// TCP address to listen on, e.g. 127.0.0.1:8080.
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Listen on a Unix domain socket instead of TCP.
    #[arg(short, long)]
    pub unix_socket: Option<PathBuf>,
}

impl Cli {
    /// Load the config file (or defaults), apply overrides, then validate.
    pub fn load_config(&self) -> Result<QrServConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => QrServConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
            config.listener.unix_socket = None;
        }
        if let Some(path) = &self.unix_socket {
            config.listener.unix_socket = Some(path.clone());
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
