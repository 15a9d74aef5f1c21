//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use formref::FormId;

/// Session snapshot with load order and live forms (-S/--session).
pub fn session_arg() -> Arg {
    Arg::new("session")
        .short('S')
        .long("session")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Session file (JSON load order and live forms); omit to run without a package table")
}

/// Form identifier to encode (positional).
pub fn form_id_arg() -> Arg {
    Arg::new("form_id")
        .value_name("FORM_ID")
        .required(true)
        .value_parser(value_parser!(FormId))
        .help("Form identifier, decimal or 0x-prefixed hex")
}

/// Encoded record file (positional).
pub fn record_path_arg() -> Arg {
    Arg::new("record_path")
        .value_name("RECORD")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File holding one encoded record")
}

/// Result code to describe (positional).
pub fn code_arg() -> Arg {
    Arg::new("code")
        .value_name("CODE")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Numeric result code")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the raw record to file instead of printing a hex dump")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Increase log verbosity (RUST_LOG overrides)")
}
