use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{
    CONFIG_HELP, LOG_FILE_HELP, OUTPUT_HELP, QUIET_HELP, STAGES_HELP, USAGE_EXAMPLE,
    VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::workflow::InputSource;

/// Options for a single diagram generation run
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// Where the workflow description is read from
    pub stages: InputSource,
    /// File the diagram is written to, if any
    pub output: Option<PathBuf>,
    /// Theme configuration file, if any
    pub config: Option<PathBuf>,
    /// Logging verbosity
    pub verbosity: LogLevel,
    /// File log records are mirrored to, if any
    pub log_file: Option<String>,
}

impl CliOptions {
    /// Extracts the run options from parsed command-line arguments
    ///
    /// # Errors
    /// Returns an error if the required stages option is missing
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let stages = matches
            .get_one::<String>("stages")
            .ok_or_else(|| generic_error("Stages option not found"))?;

        Ok(CliOptions {
            stages: InputSource::from_arg(stages),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            config: matches
                .get_one::<String>("config")
                .map(|c| PathBuf::from(shellexpand::tilde(c).as_ref())),
            verbosity: get_verbosity(matches),
            log_file: matches.get_one::<String>("log_file").cloned(),
        })
    }
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `stages`: Workflow description file, or `-` for stdin (required)
/// - `output`: File to write the diagram to
/// - `config`: Theme configuration file
/// - `verbose`: Increase verbosity level
/// - `quiet`: Only log errors
/// - `log_file`: Mirror log records to a file
pub fn build_cli() -> Command {
    // define arg for the workflow description
    let arg_stages = Arg::new("stages")
        .short('s')
        .long("stages")
        .value_name("FILE")
        .help(STAGES_HELP)
        .required(true);

    // define arg for the diagram destination
    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help(OUTPUT_HELP);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(clap::ArgAction::SetTrue)
        .conflicts_with("verbose");

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .after_help(USAGE_EXAMPLE)
        .arg(arg_stages)
        .arg(arg_output)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(log_file)
}

/// Parses the process arguments
///
/// Exits with a usage message when the arguments are invalid.
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// `--quiet` limits logging to errors; otherwise the number of
/// `-v`/`--verbose` flags raises the level from Info.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    if matches.get_flag("quiet") {
        return LogLevel::Error;
    }
    LogLevel::from_occurrences(matches.get_count("verbose"))
}
