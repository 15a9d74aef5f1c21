use std::path::PathBuf;

use formref::{FormId, FormReference};
use tracing::info;

use super::record_file::write_record;
use super::render::{describe_reference, hex_dump};
use super::session::load_session;

pub struct EncodeArgs {
    pub form_id: FormId,
    pub session: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn run(args: EncodeArgs) {
    let session = match load_session(args.session.as_deref()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let packages = session.as_ref().map(|s| &s.load_order);
    let reference = FormReference::from_form_id(args.form_id, &packages);

    let Some(path) = args.output else {
        print!("{}", describe_reference(&reference));
        print!("{}", hex_dump(&reference.to_bytes()));
        return;
    };

    if let Err(e) = write_record(&path, &reference) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    info!(
        form_id = %args.form_id,
        package = %reference.package_name(),
        path = %path.display(),
        "record written"
    );
}
