mod cli;
mod commands;

use cli::{DecodeParams, EncodeParams, ExplainParams, build_cli, verbosity};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("encode", m)) => {
            init_tracing(verbosity(m));
            let params = EncodeParams::from_matches(m);
            commands::encode::run(params.into());
        }
        Some(("decode", m)) => {
            init_tracing(verbosity(m));
            let params = DecodeParams::from_matches(m);
            commands::decode::run(params.into());
        }
        Some(("explain", m)) => {
            init_tracing(verbosity(m));
            let params = ExplainParams::from_matches(m);
            commands::explain::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over -v flags.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
