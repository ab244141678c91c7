// src/signal.rs
//! Blocking wait for a single OS signal.
//!
//! The wait is fully synchronous: the calling thread parks on the
//! signal-hook iterator until the requested signal is delivered, then the
//! signal's symbolic name is returned. There is no timeout and no
//! cancellation; an invocation waiting on a signal that never arrives hangs
//! until the process is killed.

use crate::error::AppError;
use signal_hook::consts::signal::*;
use signal_hook::iterator::Signals;
use std::os::raw::c_int;

/// Blocks until `signum` is delivered to this process and returns its
/// symbolic name (e.g. `SIGUSR1`).
///
/// Registration fails for signals the OS forbids handling (SIGKILL,
/// SIGSTOP) and for numbers outside the valid range.
pub fn wait_for_signal(signum: c_int) -> Result<String, AppError> {
    let mut signals = Signals::new([signum])
        .map_err(|e| AppError::Signal(format!("cannot register signal {}: {}", signum, e)))?;

    log::info!("Waiting for signal {} ({})", signum, signal_name(signum));
    for received in signals.forever() {
        if received == signum {
            let name = signal_name(received);
            log::info!("Received {}", name);
            return Ok(name);
        }
    }

    Err(AppError::Signal(format!(
        "signal stream closed before signal {} arrived",
        signum
    )))
}

/// Symbolic name for a signal number.
///
/// Covers the portable Unix signals; anything else renders as `SIG<n>`.
pub fn signal_name(signum: c_int) -> String {
    let name = match signum {
        SIGHUP => "SIGHUP",
        SIGINT => "SIGINT",
        SIGQUIT => "SIGQUIT",
        SIGILL => "SIGILL",
        SIGTRAP => "SIGTRAP",
        SIGABRT => "SIGABRT",
        SIGBUS => "SIGBUS",
        SIGFPE => "SIGFPE",
        SIGKILL => "SIGKILL",
        SIGUSR1 => "SIGUSR1",
        SIGSEGV => "SIGSEGV",
        SIGUSR2 => "SIGUSR2",
        SIGPIPE => "SIGPIPE",
        SIGALRM => "SIGALRM",
        SIGTERM => "SIGTERM",
        SIGCHLD => "SIGCHLD",
        SIGCONT => "SIGCONT",
        SIGSTOP => "SIGSTOP",
        SIGTSTP => "SIGTSTP",
        SIGTTIN => "SIGTTIN",
        SIGTTOU => "SIGTTOU",
        SIGURG => "SIGURG",
        SIGXCPU => "SIGXCPU",
        SIGXFSZ => "SIGXFSZ",
        SIGVTALRM => "SIGVTALRM",
        SIGPROF => "SIGPROF",
        SIGWINCH => "SIGWINCH",
        SIGIO => "SIGIO",
        SIGSYS => "SIGSYS",
        other => return format!("SIG{}", other),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn signal_names_match_symbolic_constants() {
        assert_eq!(signal_name(SIGUSR1), "SIGUSR1");
        assert_eq!(signal_name(SIGTERM), "SIGTERM");
        assert_eq!(signal_name(SIGHUP), "SIGHUP");
    }

    #[test]
    fn unknown_signal_numbers_get_numeric_names() {
        assert_eq!(signal_name(1000), "SIG1000");
    }

    #[test]
    fn kill_cannot_be_registered() {
        let err = wait_for_signal(SIGKILL).unwrap_err();
        assert!(err.to_string().contains("Signal wait failed"));
    }

    #[test]
    fn wait_returns_the_delivered_signal_name() {
        let raiser = thread::spawn(|| {
            thread::sleep(Duration::from_millis(100));
            signal_hook::low_level::raise(SIGUSR1).unwrap();
        });

        let name = wait_for_signal(SIGUSR1).unwrap();
        raiser.join().unwrap();
        assert_eq!(name, "SIGUSR1");
    }
}
