#![forbid(unsafe_code)]

//! `tinct` binary entry point.

use std::process::ExitCode;

use tinct_cli::{cli, commands, logging};

fn main() -> ExitCode {
    let opts = cli::Opts::parse();
    logging::init(&opts);

    let result = commands::run(&opts)
        .and_then(|output| commands::write_output(opts.out.as_deref(), &output));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
