use std::path::PathBuf;

use formref::report;

use super::record_file::read_record;
use super::render::{describe_reference, describe_resolution};
use super::session::load_session;

pub struct DecodeArgs {
    pub record_path: PathBuf,
    pub session: Option<PathBuf>,
}

pub fn run(args: DecodeArgs) {
    let session = match load_session(args.session.as_deref()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let reference = match read_record(&args.record_path) {
        Ok(reference) => reference,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let packages = session.as_ref().map(|s| &s.load_order);
    let forms = session.as_ref().map(|s| &s.forms);
    let (code, id) = reference.to_identifier(&packages, &forms);

    print!("{}", describe_reference(&reference));
    print!("{}", describe_resolution(code, id));

    if !code.is_success() {
        report(code);
        std::process::exit(1);
    }
}
