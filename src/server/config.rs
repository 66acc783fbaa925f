//! Server configuration from command-line flags and environment variables.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Password evaluator HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "pwd-evaluator", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PWD_EVALUATOR_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Directory holding index.html and the front-end assets
    #[arg(long, env = "PWD_EVALUATOR_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            verbose: 0,
        }
    }
}

impl ServerConfig {
    /// Set the static asset directory
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
