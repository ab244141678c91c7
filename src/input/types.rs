// src/input/types.rs
//! Closed vocabularies for input dispatch.
//!
//! Sources and representations form two small closed sets. Keeping them as
//! enums means every (source, representation) pair is covered by an
//! exhaustive match instead of a lookup table that can silently miss a key.

use clap::ValueEnum;
use std::fmt;
use std::io::{BufRead, Read};
use std::path::PathBuf;

/// Where a value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Positional index into the raw argument vector.
    Arg,
    /// Environment variable lookup.
    Env,
    /// File path read.
    File,
    /// Standard input.
    Pipe,
    /// System clipboard text.
    Clipboard,
    /// Block until an OS signal arrives; the value is its symbolic name.
    Signal,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Source::Arg => "arg",
            Source::Env => "env",
            Source::File => "file",
            Source::Pipe => "pipe",
            Source::Clipboard => "clipboard",
            Source::Signal => "signal",
        };
        write!(f, "{}", token)
    }
}

/// The in-memory shape a resolved input is requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Owned UTF-8 text.
    Str,
    /// Owned byte buffer.
    Bytes,
    /// Buffered text reader.
    #[value(name = "textio")]
    TextIo,
    /// Raw byte reader.
    #[value(name = "bufferedio")]
    BufferedIo,
    /// Absolute filesystem path.
    Path,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            InputKind::Str => "str",
            InputKind::Bytes => "bytes",
            InputKind::TextIo => "textio",
            InputKind::BufferedIo => "bufferedio",
            InputKind::Path => "path",
        };
        write!(f, "{}", token)
    }
}

/// A resolved value in one of the supported representations.
///
/// This is both what the resolver produces and what a transformation
/// returns, so anything a transformation can hand back is deliverable.
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Path(PathBuf),
    TextStream(Box<dyn BufRead>),
    ByteStream(Box<dyn Read>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Value::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Value::TextStream(_) => f.write_str("TextStream(..)"),
            Value::ByteStream(_) => f.write_str("ByteStream(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn cli_tokens_are_stable() {
        for (source, token) in [
            (Source::Arg, "arg"),
            (Source::Env, "env"),
            (Source::File, "file"),
            (Source::Pipe, "pipe"),
            (Source::Clipboard, "clipboard"),
            (Source::Signal, "signal"),
        ] {
            assert_eq!(source.to_string(), token);
            assert_eq!(
                source.to_possible_value().unwrap().get_name(),
                token,
                "Display and clap token diverge for {:?}",
                source
            );
        }

        for (kind, token) in [
            (InputKind::Str, "str"),
            (InputKind::Bytes, "bytes"),
            (InputKind::TextIo, "textio"),
            (InputKind::BufferedIo, "bufferedio"),
            (InputKind::Path, "path"),
        ] {
            assert_eq!(kind.to_string(), token);
            assert_eq!(kind.to_possible_value().unwrap().get_name(), token);
        }
    }
}
