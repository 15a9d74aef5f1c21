//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("formref")
        .about("Encode and resolve load-order independent form references")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode_command())
        .subcommand(decode_command())
        .subcommand(explain_command())
}

/// Encode a session form identifier as a save record.
pub fn encode_command() -> Command {
    Command::new("encode")
        .about("Encode a form identifier as a 264-byte save record")
        .after_help(
            r#"EXAMPLES:
  formref encode -S session.json 0x02000010            # hex dump
  formref encode -S session.json 0x02000010 -o a.rec   # raw record file
  formref encode 0xFF000801                            # runtime form, no table needed"#,
        )
        .arg(form_id_arg())
        .arg(session_arg())
        .arg(output_file_arg())
        .arg(verbose_arg())
}

/// Resolve a save record against the session's load order.
pub fn decode_command() -> Command {
    Command::new("decode")
        .about("Resolve a save record to this session's form identifier")
        .after_help(
            r#"EXAMPLES:
  formref decode -S session.json a.rec
  formref decode -S session.json a.rec -vv   # log lookups"#,
        )
        .arg(record_path_arg())
        .arg(session_arg())
        .arg(verbose_arg())
}

/// Describe a numeric result code.
pub fn explain_command() -> Command {
    Command::new("explain")
        .about("Print the diagnostic message for a result code")
        .arg(code_arg())
        .arg(verbose_arg())
}
