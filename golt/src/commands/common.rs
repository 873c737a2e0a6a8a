//! Common types and utilities for golt commands.
//!
//! This module provides the output settings shared by every command and
//! the table and JSON renderers built on them.

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use golex_scan::{Position, Token, TokenValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::{GoltError, Result};

/// Width of the `Position` and `Type` table columns.
pub const COLUMN_WIDTH: usize = 15;

// ============================================================================
// Output Settings
// ============================================================================

/// How scanned tokens are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `Position Type Value` table
    #[default]
    Table,
    /// JSON array of token records
    Json,
}

/// How token positions are printed in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PositionStyle {
    /// `line:col`
    #[default]
    LineCol,
    /// `offset:line:col`
    OffsetLineCol,
}

impl PositionStyle {
    /// Formats `pos` in this style.
    pub fn format(self, pos: Position) -> String {
        match self {
            Self::LineCol => pos.line_col(),
            Self::OffsetLineCol => pos.to_string(),
        }
    }
}

/// Resolved settings for one rendering run.
///
/// Command-line flags take precedence over the `[output]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub position: PositionStyle,
    pub comments: bool,
}

impl RenderOptions {
    /// Merges command-line overrides into the configured output settings.
    pub fn resolve(
        config: &OutputConfig,
        format: Option<OutputFormat>,
        no_comments: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            position: config.position,
            comments: config.comments && !no_comments,
        }
    }

    /// Whether `token` should appear in the output.
    pub fn keeps(&self, token: &Token) -> bool {
        self.comments || !matches!(token.value, TokenValue::Comment(_))
    }
}

// ============================================================================
// Input
// ============================================================================

/// Read a source file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        GoltError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

// ============================================================================
// Table Rendering
// ============================================================================

/// Write the table header row.
pub fn write_header(out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{:<width$} {:<width$} Value",
        "Position",
        "Type",
        width = COLUMN_WIDTH
    )?;
    Ok(())
}

/// Write one table row for `token`.
pub fn write_row(out: &mut dyn Write, token: &Token, style: PositionStyle) -> Result<()> {
    writeln!(
        out,
        "{:<width$} {:<width$} {}",
        style.format(token.pos),
        token.kind().name(),
        token,
        width = COLUMN_WIDTH
    )?;
    Ok(())
}

// ============================================================================
// JSON Rendering
// ============================================================================

/// A token as it appears in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
    pub kind: &'static str,
    pub value: serde_json::Value,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        // Parsed numbers stay numbers; everything else is its text.
        let value = match &token.value {
            TokenValue::Int(n) => serde_json::Value::from(*n),
            TokenValue::Float(x) => serde_json::Value::from(*x),
            other => serde_json::Value::from(other.to_string()),
        };
        Self {
            offset: token.pos.offset,
            line: token.pos.line,
            col: token.pos.col,
            kind: token.kind().name(),
            value,
        }
    }
}

/// Write `tokens` as a pretty-printed JSON array.
pub fn write_json<'t>(
    out: &mut dyn Write,
    tokens: impl IntoIterator<Item = &'t Token>,
) -> Result<()> {
    let records: Vec<TokenRecord> = tokens.into_iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use golex_scan::{scan, Keyword, TokenKind};

    fn render_table(source: &str, style: PositionStyle) -> String {
        let mut out = Vec::new();
        write_header(&mut out).unwrap();
        for token in scan(source).unwrap() {
            write_row(&mut out, &token, style).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_position_style_format() {
        let pos = Position::new(12, 3, 4);
        assert_eq!(PositionStyle::LineCol.format(pos), "3:4");
        assert_eq!(PositionStyle::OffsetLineCol.format(pos), "12:3:4");
    }

    #[test]
    fn test_table_layout() {
        let table = render_table("func main", PositionStyle::LineCol);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Position        Type            Value");
        assert_eq!(lines[1], "1:1             KEYWORD         func");
        assert_eq!(lines[2], "1:6             IDENT           main");
    }

    #[test]
    fn test_table_offset_positions() {
        let table = render_table("x\n<<=", PositionStyle::OffsetLineCol);
        assert!(table.contains("2:2:1           OP_SEP          <<="));
    }

    #[test]
    fn test_render_options_resolve() {
        let config = OutputConfig::default();
        let options = RenderOptions::resolve(&config, Some(OutputFormat::Json), false);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.comments);

        let options = RenderOptions::resolve(&config, None, true);
        assert_eq!(options.format, OutputFormat::Table);
        assert!(!options.comments);
    }

    #[test]
    fn test_render_options_keeps() {
        let tokens = scan("a // c").unwrap();
        let options = RenderOptions::resolve(&OutputConfig::default(), None, true);
        assert!(options.keeps(&tokens[0]));
        assert!(!options.keeps(&tokens[1]));
    }

    #[test]
    fn test_token_record_values() {
        let tokens = scan("var 0x1A 2.5 2i").unwrap();
        let records: Vec<_> = tokens.iter().map(TokenRecord::from).collect();
        assert_eq!(records[0].kind, TokenKind::Keyword.name());
        assert_eq!(records[0].value, serde_json::json!(Keyword::Var.as_str()));
        assert_eq!(records[1].value, serde_json::json!(26));
        assert_eq!(records[2].value, serde_json::json!(2.5));
        assert_eq!(records[3].value, serde_json::json!("2i"));
        assert_eq!(records[3].offset, 13);
    }

    #[test]
    fn test_write_json() {
        let tokens = scan("x").unwrap();
        let mut out = Vec::new();
        write_json(&mut out, &tokens).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "offset": 0, "line": 1, "col": 1, "kind": "IDENT", "value": "x" }
            ])
        );
    }

    #[test]
    fn test_read_missing_source() {
        let err = read_source(Path::new("/nonexistent/file.go")).unwrap_err();
        assert!(matches!(err, GoltError::Io(_)));
        assert!(err.to_string().contains("/nonexistent/file.go"));
    }
}
