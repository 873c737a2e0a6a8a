//! Scan command implementation.
//!
//! Scans a whole file up front and renders the token sequence as a table
//! or as JSON. Nothing is printed when the scan fails.

use std::io::Write;
use std::path::PathBuf;

use golex_scan::Scanner;
use tracing::debug;

use crate::commands::common::{
    read_source, write_header, write_json, write_row, OutputFormat, RenderOptions,
};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Leave comment tokens out of the output.
    pub no_comments: bool,
}

/// Run the scan command, writing rendered tokens to `out`.
pub fn run_scan(args: ScanArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let options = RenderOptions::resolve(&config.output, args.format, args.no_comments);
    let source = read_source(&args.file)?;

    let tokens = Scanner::new(&source).scan()?;
    let shown: Vec<_> = tokens.iter().filter(|t| options.keeps(t)).collect();
    debug!(total = tokens.len(), shown = shown.len(), "rendering tokens");

    match options.format {
        OutputFormat::Table => {
            write_header(out)?;
            for token in shown {
                write_row(out, token, options.position)?;
            }
        },
        OutputFormat::Json => write_json(out, shown)?,
    }

    out.flush()?;
    Ok(())
}
