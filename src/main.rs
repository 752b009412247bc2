use std::process::ExitCode;

use log::error;

use flow_diagram::prelude::*;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let matches = get_matches();
    let options = match CliOptions::from_matches(&matches) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(options.verbosity, options.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
