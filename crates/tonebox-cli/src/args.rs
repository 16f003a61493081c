//! Command-line arguments and port-path resolution.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Music module - RTTTL file transfer utility.
#[derive(Debug, Parser)]
#[command(name = "tonebox", version, about)]
pub struct Args {
    /// Communication port
    #[arg(short, long, default_value_t = default_port().to_string())]
    pub port: String,

    /// Transfer direction: read from or write to the module
    #[arg(short, long, value_enum, default_value = "read")]
    pub mode: Mode,

    /// RTTTL text file
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Direction of a transfer, from the host's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Download the stored melody from the module into the file.
    Read,
    /// Upload the file's melody into the module.
    Write,
}

/// Default communication port for the host platform.
pub fn default_port() -> &'static str {
    if cfg!(windows) {
        "COM3"
    } else {
        "ttyUSB0"
    }
}

/// Resolve a port name to the path handed to the serial layer.
///
/// Unix device names are prefixed with `/dev/` unless already given as an
/// absolute path; Windows COM names are used as-is.
pub fn resolve_port_path(port: &str) -> String {
    if cfg!(windows) || port.starts_with('/') {
        port.to_string()
    } else {
        format!("/dev/{port}")
    }
}
