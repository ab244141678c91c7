// src/output/types.rs
//! Closed vocabulary for output dispatch.

use clap::ValueEnum;
use std::fmt;

/// Where the result of a transformation is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputDest {
    /// Set an environment variable in this process.
    Env,
    /// Write a file (`-` redirects to stdout).
    File,
    /// Write to stdout.
    Pipe,
    /// Set the system clipboard text.
    Clipboard,
}

impl fmt::Display for OutputDest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            OutputDest::Env => "env",
            OutputDest::File => "file",
            OutputDest::Pipe => "pipe",
            OutputDest::Clipboard => "clipboard",
        };
        write!(f, "{}", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn cli_tokens_are_stable() {
        for (dest, token) in [
            (OutputDest::Env, "env"),
            (OutputDest::File, "file"),
            (OutputDest::Pipe, "pipe"),
            (OutputDest::Clipboard, "clipboard"),
        ] {
            assert_eq!(dest.to_string(), token);
            assert_eq!(dest.to_possible_value().unwrap().get_name(), token);
        }
    }
}
