//! `tonebox` - RTTTL file transfer utility for the music module.
//!
//! Moves a monophonic ringtone melody between a host file and the module's
//! EEPROM over a serial link. One transfer per invocation: `--mode write`
//! uploads the file's melody to the module, `--mode read` (the default)
//! downloads the stored melody into the file.

mod args;
mod error;
mod session;

use std::fs;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{resolve_port_path, Args, Mode};
use crate::error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let port_path = resolve_port_path(&args.port);
    let pacing = tonebox_protocol::Pacing::default();

    match args.mode {
        Mode::Write => {
            let raw = fs::read_to_string(&args.file).map_err(|source| CliError::File {
                path: args.file.clone(),
                source,
            })?;
            let record = tonebox_rtttl::extract(&raw)?;
            tracing::debug!(name = %record.name, len = record.body.len(), "extracted melody");

            // An unusable file must fail before the port is even opened.
            tonebox_protocol::check_body_len(&record.body)?;

            let mut port = session::open(&port_path)?;
            tonebox_protocol::upload(&mut port, &record.body, &pacing)?;
            println!(
                "Uploaded \"{}\" ({} bytes) via {}",
                record.name,
                record.body.len(),
                port_path
            );
        }
        Mode::Read => {
            let mut port = session::open(&port_path)?;
            let record = tonebox_protocol::download(&mut port, &pacing)?;
            drop(port);

            fs::write(&args.file, record.to_string()).map_err(|source| CliError::File {
                path: args.file.clone(),
                source,
            })?;
            println!(
                "Saved melody ({} bytes) from {} to {}",
                record.body.len(),
                port_path,
                args.file.display()
            );
        }
    }

    Ok(())
}
