//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use formref::FormId;

use crate::commands::decode::DecodeArgs;
use crate::commands::encode::EncodeArgs;
use crate::commands::explain::ExplainArgs;

pub struct EncodeParams {
    pub form_id: FormId,
    pub session: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            form_id: m.get_one::<FormId>("form_id").copied().unwrap_or_default(),
            session: m.get_one::<PathBuf>("session").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<EncodeParams> for EncodeArgs {
    fn from(p: EncodeParams) -> Self {
        Self {
            form_id: p.form_id,
            session: p.session,
            output: p.output,
        }
    }
}

pub struct DecodeParams {
    pub record_path: PathBuf,
    pub session: Option<PathBuf>,
}

impl DecodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            record_path: m
                .get_one::<PathBuf>("record_path")
                .cloned()
                .unwrap_or_default(),
            session: m.get_one::<PathBuf>("session").cloned(),
        }
    }
}

impl From<DecodeParams> for DecodeArgs {
    fn from(p: DecodeParams) -> Self {
        Self {
            record_path: p.record_path,
            session: p.session,
        }
    }
}

pub struct ExplainParams {
    pub code: u32,
}

impl ExplainParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            code: m.get_one::<u32>("code").copied().unwrap_or_default(),
        }
    }
}

impl From<ExplainParams> for ExplainArgs {
    fn from(p: ExplainParams) -> Self {
        Self { code: p.code }
    }
}

/// Verbosity from -v flags: 0 (warn) to 3+ (trace).
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}
