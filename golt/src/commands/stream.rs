//! Stream command implementation.
//!
//! Renders the token table one row at a time while the file is being
//! scanned. Rows printed before a scan error stay printed.

use std::io::Write;
use std::path::PathBuf;

use golex_scan::Scanner;
use tracing::debug;

use crate::commands::common::{read_source, write_header, write_row, RenderOptions};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stream command.
#[derive(Debug, Clone)]
pub struct StreamArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// Leave comment tokens out of the output.
    pub no_comments: bool,
}

/// Run the stream command, writing table rows to `out` as tokens arrive.
pub fn run_stream(args: StreamArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let options = RenderOptions::resolve(&config.output, None, args.no_comments);
    let source = read_source(&args.file)?;

    write_header(out)?;
    let mut rows = 0usize;
    for token in Scanner::new(&source) {
        let token = token?;
        if options.keeps(&token) {
            write_row(out, &token, options.position)?;
            out.flush()?;
            rows += 1;
        }
    }

    debug!(rows, "stream finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoltError;
    use golex_scan::ScanError;
    use tempfile::TempDir;

    fn run(source: &str, out: &mut Vec<u8>) -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.go");
        std::fs::write(&file, source).unwrap();

        let args = StreamArgs {
            file,
            no_comments: false,
        };
        run_stream(args, &Config::default(), out)
    }

    #[test]
    fn test_stream_rows() {
        let mut out = Vec::new();
        run("func f() {}", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 7);
        assert!(output.contains("1:6             IDENT           f"));
    }

    #[test]
    fn test_stream_keeps_rows_before_error() {
        let mut out = Vec::new();
        let err = run("a b\n\"open", &mut out).unwrap_err();
        assert!(matches!(
            err,
            GoltError::Scan(ScanError::UnterminatedLiteral { delimiter: '"', .. })
        ));

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("1:3             IDENT           b"));
    }
}
