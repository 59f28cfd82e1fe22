mod platform;

use std::path::PathBuf;

use clap::Parser;

use platform::logging::{LogDestination, LogLevel, LogOptions};

/// Look up a URL's content category and block it during study time.
#[derive(Debug, Parser)]
#[command(name = "studygate", version)]
struct Args {
    /// RON configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "studygate.ron")]
    config: PathBuf,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
    /// Most verbose level written to the log.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    /// Log file used by the `file` and `both` destinations.
    #[arg(long, default_value = "studygate.log")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    platform::logging::initialize(&LogOptions {
        destination: args.log,
        level: args.log_level,
        file: args.log_file.clone(),
    });

    if let Err(err) = platform::run_app(&args.config) {
        eprintln!("studygate error: {err:#}");
        std::process::exit(1);
    }
}
