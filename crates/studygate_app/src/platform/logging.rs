//! Logging setup for the studygate binary.
//!
//! The terminal carries the interactive form, so file output is the default
//! and terminal logging is opt-in.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogDestination {
    /// Write to the log file.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both the log file and the terminal.
    Both,
}

/// Most verbose level that is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub destination: LogDestination,
    pub level: LogLevel,
    pub file: PathBuf,
}

pub fn initialize(options: &LogOptions) {
    let loggers = build_loggers(options);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

/// A file that cannot be created falls back to terminal output.
fn build_loggers(options: &LogOptions) -> Vec<Box<dyn SharedLogger>> {
    let level = LevelFilter::from(options.level);
    let config = build_config();

    let file_logger = match options.destination {
        LogDestination::File | LogDestination::Both => {
            create_file_logger(level, config.clone(), &options.file)
        }
        LogDestination::Terminal => None,
    };
    let wants_terminal = match options.destination {
        LogDestination::Terminal | LogDestination::Both => true,
        LogDestination::File => file_logger.is_none(),
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if wants_terminal {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(file_logger) = file_logger {
        loggers.push(file_logger);
    }
    loggers
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file {}: {}", path.display(), err);
            None
        }
    }
}
