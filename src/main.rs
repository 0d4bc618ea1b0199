//! collection-patcher - one-shot Postman collection update
//!
//! Run from the backend directory with no arguments to patch
//! `postman/DocuFlow.postman_collection.json` in place.

use anyhow::Context;
use collection_patcher::cli::{self, Command};
use collection_patcher::patch_with;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the summary
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", cli::usage()),
        Command::Version => println!("{}", cli::version()),
        Command::Patch { path, options } => {
            let report = patch_with(&path, &options)
                .with_context(|| format!("Failed to patch {}", path.display()))?;
            println!("{report}");
        }
    }

    Ok(())
}
