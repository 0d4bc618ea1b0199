//! Command-line arguments

use crate::constants::{APP_NAME, APP_VERSION, DEFAULT_COLLECTION_PATH};
use crate::patcher::PatchOptions;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// What the binary was asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Patch { path: PathBuf, options: PatchOptions },
    Help,
    Version,
}

pub fn usage() -> String {
    format!(
        "Usage: {APP_NAME} [--skip-existing] [PATH]\n\n\
         Inserts the Invoices, Resumes, Contracts and Receipts folders before\n\
         the \"Health Check\" item of a Postman collection.\n\n\
         Arguments:\n  \
           PATH             Collection file (default: {DEFAULT_COLLECTION_PATH})\n\n\
         Options:\n  \
           --skip-existing  Do not insert folders that already exist\n  \
           -h, --help       Print this help\n  \
           -V, --version    Print version"
    )
}

pub fn version() -> String {
    format!("{APP_NAME} {APP_VERSION}")
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut path: Option<PathBuf> = None;
    let mut options = PatchOptions::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--skip-existing" => options.skip_existing = true,
            flag if flag.starts_with('-') => bail!("unknown option '{}'\n\n{}", flag, usage()),
            _ => {
                if path.is_some() {
                    bail!("unexpected extra argument '{}'\n\n{}", arg, usage());
                }
                path = Some(PathBuf::from(&arg));
            }
        }
    }

    Ok(Command::Patch {
        path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_COLLECTION_PATH)),
        options,
    })
}
