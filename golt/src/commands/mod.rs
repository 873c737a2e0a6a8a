//! Command modules for the golt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file; `scan` and `stream`
//! render through the shared helpers in [`common`].

pub mod common;

pub mod init;
pub mod scan;
pub mod stream;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use scan::{run_scan, ScanArgs};
pub use stream::{run_stream, StreamArgs};
