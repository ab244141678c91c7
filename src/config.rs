// src/config.rs
use crate::error::AppError;
use crate::input::{InputKind, Source};
use crate::output::OutputDest;
use clap::Parser;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Where to read input from
    #[arg(long, value_enum, default_value_t = Source::Pipe)]
    pub input_source: Source,

    /// Name for the input (argument index, env var, file path; '-' for stdin)
    #[arg(long, default_value = "-")]
    pub input_name: String,

    /// Which representation to resolve the input into
    #[arg(long, value_enum, default_value_t = InputKind::Str)]
    pub input_type: InputKind,

    /// Where to write the result
    #[arg(long, value_enum, default_value_t = OutputDest::Pipe)]
    pub output_dest: OutputDest,

    /// Name for the output (env var name or file path; '-' for stdout)
    #[arg(long, default_value = "-")]
    pub output_name: String,

    /// Overwrite existing output files when using file output
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration driving one invocation.
#[derive(Debug, Clone)]
pub struct IoConfig {
    pub input_source: Source,
    pub input_name: Option<String>,
    pub input_type: InputKind,
    pub output_dest: OutputDest,
    pub output_name: Option<String>,
    pub force: bool,
    pub verbose: bool,
}

impl IoConfig {
    /// Resolves a run configuration from parsed CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Ok(IoConfig {
            input_source: cli.input_source,
            input_name: Some(cli.input_name),
            input_type: cli.input_type,
            output_dest: cli.output_dest,
            output_name: Some(cli.output_name),
            force: cli.force,
            verbose: cli.verbose,
        })
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_source: Source::Pipe,
            input_name: Some("-".to_string()),
            input_type: InputKind::Str,
            output_dest: OutputDest::Pipe,
            output_name: Some("-".to_string()),
            force: false,
            verbose: false,
        }
    }
}
