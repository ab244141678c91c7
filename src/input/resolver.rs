// src/input/resolver.rs
//! Resolves a (source, representation) pair into a concrete value.
//!
//! Every representation is an exhaustive match over `Source`, so adding a
//! source or a representation forces every combination to be revisited at
//! compile time.

use super::types::{InputKind, Source, Value};
use crate::clipboard::read_clipboard;
use crate::error::AppError;
use crate::output::absolutize;
use crate::signal::wait_for_signal;
use crate::tempfiles::TempStore;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Resolves input values for one invocation.
///
/// Owns a snapshot of the raw argument vector and an optional replacement
/// for standard input (both injectable for tests and embedding), plus the
/// temp files backing clipboard- and signal-sourced streams. Keep the
/// resolver alive until the resolved value has been consumed.
pub struct InputResolver {
    argv: Vec<String>,
    stdin: Option<Box<dyn BufRead>>,
    temp: TempStore,
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InputResolver {
    /// Resolver over the process argument vector.
    pub fn new() -> Self {
        Self::with_args(std::env::args().collect())
    }

    /// Resolver over an explicit argument vector.
    pub fn with_args(argv: Vec<String>) -> Self {
        Self {
            argv,
            stdin: None,
            temp: TempStore::new(),
        }
    }

    /// Replaces standard input with an arbitrary reader.
    pub fn with_stdin(mut self, reader: Box<dyn BufRead>) -> Self {
        self.stdin = Some(reader);
        self
    }

    /// The pipe source: the injected reader when one was supplied,
    /// otherwise the live process stdin.
    fn stdin_reader(&mut self) -> Box<dyn BufRead> {
        match self.stdin.take() {
            Some(reader) => reader,
            None => Box::new(BufReader::new(io::stdin())),
        }
    }

    fn read_stdin_to_string(&mut self) -> Result<String, AppError> {
        let mut buf = String::new();
        self.stdin_reader().read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Produces the value of `source` in the requested representation.
    pub fn resolve(
        &mut self,
        source: Source,
        name: Option<&str>,
        kind: InputKind,
    ) -> Result<Value, AppError> {
        log::debug!(
            "Resolving source '{}' (name: {:?}) as '{}'",
            source,
            name,
            kind
        );
        match kind {
            InputKind::Str => self.read_text(source, name).map(Value::Text),
            InputKind::Bytes => self.read_bytes(source, name).map(Value::Bytes),
            InputKind::TextIo => self.open_text_stream(source, name),
            InputKind::BufferedIo => self.open_byte_stream(source, name),
            InputKind::Path => self.read_path(source, name).map(Value::Path),
        }
    }

    fn require_name<'a>(source: Source, name: Option<&'a str>) -> Result<&'a str, AppError> {
        name.ok_or(AppError::MissingName(source))
    }

    /// Sources that cannot produce a value without a qualifying name.
    fn check_named_source(source: Source, name: Option<&str>) -> Result<(), AppError> {
        if matches!(
            source,
            Source::Arg | Source::Env | Source::File | Source::Signal
        ) && name.is_none()
        {
            return Err(AppError::MissingName(source));
        }
        Ok(())
    }

    fn read_text(&mut self, source: Source, name: Option<&str>) -> Result<String, AppError> {
        match source {
            Source::Arg => {
                let name = Self::require_name(source, name)?;
                let index: usize = name
                    .parse()
                    .map_err(|_| AppError::InvalidArgIndex(name.to_string()))?;
                self.argv
                    .get(index)
                    .cloned()
                    .ok_or(AppError::ArgIndexOutOfRange(index))
            }
            Source::Env => {
                let name = Self::require_name(source, name)?;
                std::env::var(name).map_err(|_| AppError::EnvVarNotSet(name.to_string()))
            }
            Source::File => {
                let name = Self::require_name(source, name)?;
                Ok(fs::read_to_string(name)?)
            }
            Source::Pipe => self.read_stdin_to_string(),
            Source::Clipboard => read_clipboard(),
            Source::Signal => {
                let name = Self::require_name(source, name)?;
                let signum: i32 = name
                    .parse()
                    .map_err(|_| AppError::InvalidSignalNumber(name.to_string()))?;
                wait_for_signal(signum)
            }
        }
    }

    /// Text that happens to name an existing file is read as that file's
    /// raw bytes; anything else becomes the text's UTF-8 encoding.
    fn read_bytes(&mut self, source: Source, name: Option<&str>) -> Result<Vec<u8>, AppError> {
        Self::check_named_source(source, name)?;

        let text = self.read_text(source, name)?;
        let path = Path::new(&text);
        if path.is_file() {
            log::debug!(
                "Resolved text names an existing file, reading bytes from {}",
                path.display()
            );
            return Ok(fs::read(path)?);
        }
        Ok(text.into_bytes())
    }

    fn open_text_stream(
        &mut self,
        source: Source,
        name: Option<&str>,
    ) -> Result<Value, AppError> {
        match source {
            Source::Pipe => Ok(Value::TextStream(self.stdin_reader())),
            Source::File => {
                let name = Self::require_name(source, name)?;
                Ok(Value::TextStream(Box::new(BufReader::new(File::open(
                    name,
                )?))))
            }
            Source::Env | Source::Arg => {
                let raw = self.read_text(source, name)?;
                Ok(Value::TextStream(Box::new(BufReader::new(File::open(
                    raw,
                )?))))
            }
            Source::Clipboard | Source::Signal => Err(AppError::UnsupportedCombination {
                src: source,
                kind: InputKind::TextIo,
            }),
        }
    }

    fn open_byte_stream(
        &mut self,
        source: Source,
        name: Option<&str>,
    ) -> Result<Value, AppError> {
        match source {
            Source::Pipe => Ok(Value::ByteStream(Box::new(self.stdin_reader()))),
            Source::File => {
                let name = Self::require_name(source, name)?;
                Ok(Value::ByteStream(Box::new(File::open(name)?)))
            }
            Source::Env | Source::Arg => {
                let raw = self.read_text(source, name)?;
                Ok(Value::ByteStream(Box::new(File::open(raw)?)))
            }
            Source::Clipboard => {
                let raw = read_clipboard()?;
                let tmp = self.temp.persist(raw.as_bytes(), true)?;
                Ok(Value::ByteStream(Box::new(File::open(tmp)?)))
            }
            Source::Signal => {
                let name = Self::require_name(source, name)?;
                let signum: i32 = name
                    .parse()
                    .map_err(|_| AppError::InvalidSignalNumber(name.to_string()))?;
                let raw = wait_for_signal(signum)?;
                let tmp = self.temp.persist(raw.as_bytes(), true)?;
                Ok(Value::ByteStream(Box::new(File::open(tmp)?)))
            }
        }
    }

    fn read_path(&mut self, source: Source, name: Option<&str>) -> Result<PathBuf, AppError> {
        Self::check_named_source(source, name)?;

        match source {
            Source::Pipe => {
                let content = self.read_stdin_to_string()?;
                self.temp.persist(content.as_bytes(), false)
            }
            Source::File => {
                let name = Self::require_name(source, name)?;
                absolutize(Path::new(name))
            }
            Source::Env | Source::Arg => {
                let raw = self.read_text(source, name)?;
                absolutize(Path::new(&raw))
            }
            Source::Clipboard => {
                let raw = read_clipboard()?;
                self.temp.persist(raw.as_bytes(), false)
            }
            Source::Signal => Err(AppError::UnsupportedCombination {
                src: source,
                kind: InputKind::Path,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn resolver() -> InputResolver {
        InputResolver::with_args(vec![
            "plumb".to_string(),
            "first".to_string(),
            "second".to_string(),
        ])
    }

    fn resolver_with_stdin(input: &str) -> InputResolver {
        resolver().with_stdin(Box::new(std::io::Cursor::new(input.as_bytes().to_vec())))
    }

    fn extract_text(value: Value) -> String {
        crate::output::extract_text(value).unwrap()
    }

    #[test]
    fn str_from_arg_indexes_the_argument_vector() {
        let value = resolver()
            .resolve(Source::Arg, Some("2"), InputKind::Str)
            .unwrap();
        assert_eq!(extract_text(value), "second");
    }

    #[test]
    fn str_from_arg_rejects_non_numeric_index() {
        let err = resolver()
            .resolve(Source::Arg, Some("two"), InputKind::Str)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument index 'two'");
    }

    #[test]
    fn str_from_arg_rejects_out_of_range_index() {
        let err = resolver()
            .resolve(Source::Arg, Some("9"), InputKind::Str)
            .unwrap_err();
        assert_eq!(err.to_string(), "Argument index 9 is out of range");
    }

    #[test]
    fn str_from_env_reads_the_variable() {
        std::env::set_var("PLUMB_TEST_STR_ENV", "from env");
        let value = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_STR_ENV"), InputKind::Str)
            .unwrap();
        assert_eq!(extract_text(value), "from env");
    }

    #[test]
    fn str_from_unset_env_fails() {
        let err = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_UNSET_VAR"), InputKind::Str)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable 'PLUMB_TEST_UNSET_VAR' is not set"
        );
    }

    #[test]
    fn str_from_file_reads_utf8_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "file text").unwrap();

        let value = resolver()
            .resolve(
                Source::File,
                Some(file.path().to_str().unwrap()),
                InputKind::Str,
            )
            .unwrap();
        assert_eq!(extract_text(value), "file text");
    }

    #[test]
    fn str_from_pipe_reads_all_of_stdin() {
        let value = resolver_with_stdin("piped in\nsecond line\n")
            .resolve(Source::Pipe, Some("-"), InputKind::Str)
            .unwrap();
        assert_eq!(extract_text(value), "piped in\nsecond line\n");
    }

    #[test]
    fn bytes_from_pipe_is_utf8_encoding() {
        let value = resolver_with_stdin("piped bytes")
            .resolve(Source::Pipe, Some("-"), InputKind::Bytes)
            .unwrap();
        match value {
            Value::Bytes(b) => assert_eq!(b, b"piped bytes".to_vec()),
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn textio_from_pipe_streams_stdin() {
        let value = resolver_with_stdin("streamed stdin")
            .resolve(Source::Pipe, Some("-"), InputKind::TextIo)
            .unwrap();
        assert_eq!(extract_text(value), "streamed stdin");
    }

    #[test]
    fn bufferedio_from_pipe_streams_raw_stdin() {
        let value = resolver_with_stdin("raw stdin")
            .resolve(Source::Pipe, Some("-"), InputKind::BufferedIo)
            .unwrap();
        match value {
            Value::ByteStream(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).unwrap();
                assert_eq!(buf, b"raw stdin".to_vec());
            }
            other => panic!("expected byte stream, got {:?}", other),
        }
    }

    #[test]
    fn path_from_pipe_persists_stdin_to_a_temp_file() {
        let mut resolver = resolver_with_stdin("persisted stdin");
        let value = resolver
            .resolve(Source::Pipe, Some("-"), InputKind::Path)
            .unwrap();
        match value {
            Value::Path(p) => {
                assert_eq!(std::fs::read_to_string(&p).unwrap(), "persisted stdin");
                assert_eq!(p.extension().unwrap(), "txt");
            }
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn missing_name_fails_for_named_sources() {
        for source in [Source::Arg, Source::Env, Source::File, Source::Signal] {
            let err = resolver().resolve(source, None, InputKind::Str).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Missing name for source '{}'", source)
            );
        }
    }

    #[test]
    fn missing_name_takes_priority_over_unsupported_path_source() {
        // signal+path is unsupported, but the missing name is reported first
        let err = resolver()
            .resolve(Source::Signal, None, InputKind::Path)
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing name for source 'signal'");
    }

    #[test]
    fn bytes_from_plain_text_is_utf8_encoding() {
        std::env::set_var("PLUMB_TEST_BYTES_ENV", "just text");
        let value = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_BYTES_ENV"), InputKind::Bytes)
            .unwrap();
        match value {
            Value::Bytes(b) => assert_eq!(b, b"just text".to_vec()),
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn bytes_from_text_naming_an_existing_file_reads_that_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1u8, 2, 3, 255]).unwrap();
        std::env::set_var(
            "PLUMB_TEST_BYTES_PATH",
            file.path().to_str().unwrap(),
        );

        let value = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_BYTES_PATH"), InputKind::Bytes)
            .unwrap();
        match value {
            Value::Bytes(b) => assert_eq!(b, vec![1u8, 2, 3, 255]),
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn textio_from_file_streams_the_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "streamed").unwrap();

        let value = resolver()
            .resolve(
                Source::File,
                Some(file.path().to_str().unwrap()),
                InputKind::TextIo,
            )
            .unwrap();
        assert_eq!(extract_text(value), "streamed");
    }

    #[test]
    fn textio_from_env_opens_the_named_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "indirect").unwrap();
        std::env::set_var(
            "PLUMB_TEST_TEXTIO_PATH",
            file.path().to_str().unwrap(),
        );

        let value = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_TEXTIO_PATH"), InputKind::TextIo)
            .unwrap();
        assert_eq!(extract_text(value), "indirect");
    }

    #[test]
    fn textio_is_unsupported_for_clipboard_and_signal() {
        for source in [Source::Clipboard, Source::Signal] {
            let err = resolver()
                .resolve(source, Some("10"), InputKind::TextIo)
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Unsupported source '{}' for input type 'textio'", source)
            );
        }
    }

    #[test]
    fn bufferedio_from_file_streams_raw_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8, 1, 2]).unwrap();

        let value = resolver()
            .resolve(
                Source::File,
                Some(file.path().to_str().unwrap()),
                InputKind::BufferedIo,
            )
            .unwrap();
        match value {
            Value::ByteStream(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).unwrap();
                assert_eq!(buf, vec![0u8, 1, 2]);
            }
            other => panic!("expected byte stream, got {:?}", other),
        }
    }

    #[test]
    fn path_from_file_absolutizes_the_name() {
        let value = resolver()
            .resolve(Source::File, Some("relative/output.txt"), InputKind::Path)
            .unwrap();
        match value {
            Value::Path(p) => {
                assert!(p.is_absolute());
                assert!(p.ends_with("relative/output.txt"));
            }
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn path_from_env_interprets_the_text_as_a_path() {
        std::env::set_var("PLUMB_TEST_PATH_ENV", "some/file.txt");
        let value = resolver()
            .resolve(Source::Env, Some("PLUMB_TEST_PATH_ENV"), InputKind::Path)
            .unwrap();
        match value {
            Value::Path(p) => assert!(p.is_absolute() && p.ends_with("some/file.txt")),
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn path_is_unsupported_for_signal() {
        let err = resolver()
            .resolve(Source::Signal, Some("10"), InputKind::Path)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported source 'signal' for input type 'path'"
        );
    }
}
