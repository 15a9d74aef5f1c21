use formref::ResultCode;

pub struct ExplainArgs {
    pub code: u32,
}

pub fn run(args: ExplainArgs) {
    let Some(code) = ResultCode::from_u32(args.code) else {
        eprintln!("error: unknown result code {}", args.code);
        std::process::exit(1);
    };

    match code.message() {
        Some(message) => println!("{code:?} ({}): {message}", args.code),
        None => println!("{code:?} ({})", args.code),
    }
}
