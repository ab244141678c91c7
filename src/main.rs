// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use plumb::{execute, AppError, CommandLineInput, IoConfig, Value};

/// Sets up logging configuration.
///
/// Console logs go to stderr so piped output stays clean; the debug-level
/// file log lives under the temp dir.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("plumb.log");

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// `plumb | head` should exit quietly instead of reporting a broken pipe.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

/// The shipped binary applies the identity transformation, making `plumb`
/// a generic source-to-destination adapter.
fn passthrough(value: Value) -> Result<Value, AppError> {
    Ok(value)
}

fn main() {
    reset_sigpipe();

    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = IoConfig::resolve(cli).and_then(|config| execute(&config, passthrough));

    if let Err(err) = result {
        log::debug!("Invocation failed: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
