// src/command.rs
//! Binds a single-argument transformation into a runnable command.
//!
//! The wrapper resolves the input, applies the transformation, enforces the
//! overwrite guard for concrete file destinations, and delivers the result.
//! Any error along the way surfaces as a single `AppError` for the binary
//! to print; nothing here panics on bad user input.

use crate::config::{CommandLineInput, IoConfig};
use crate::error::AppError;
use crate::input::{InputResolver, Value};
use crate::output::{guard_output_path, write_output, write_to_file};
use clap::Parser;

/// Parses the process command line and runs `transform` with it.
///
/// Invalid option values never reach this far; clap reports them and exits
/// with status 2.
pub fn run<F>(transform: F) -> Result<(), AppError>
where
    F: FnOnce(Value) -> Result<Value, AppError>,
{
    let cli = CommandLineInput::parse();
    let config = IoConfig::resolve(cli)?;
    execute(&config, transform)
}

/// Runs `transform` under an explicit configuration.
pub fn execute<F>(config: &IoConfig, transform: F) -> Result<(), AppError>
where
    F: FnOnce(Value) -> Result<Value, AppError>,
{
    let mut resolver = InputResolver::new();
    execute_with(config, &mut resolver, transform)
}

/// Runs `transform` with a caller-supplied resolver (injectable argv and
/// temp-file store).
pub fn execute_with<F>(
    config: &IoConfig,
    resolver: &mut InputResolver,
    transform: F,
) -> Result<(), AppError>
where
    F: FnOnce(Value) -> Result<Value, AppError>,
{
    let input = resolver.resolve(
        config.input_source,
        config.input_name.as_deref(),
        config.input_type,
    )?;

    let result = transform(input)?;

    // Concrete file destinations go through the overwrite guard and keep
    // their PathBuf; everything else dispatches on the original name.
    match guard_output_path(
        config.output_dest,
        config.output_name.as_deref(),
        config.force,
    )? {
        Some(path) => write_to_file(result, &path),
        None => write_output(result, config.output_dest, config.output_name.as_deref()),
    }
}
