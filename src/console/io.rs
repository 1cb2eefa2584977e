//! Console I/O abstraction
//!
//! The console never touches process arguments or the standard streams
//! directly; everything goes through `ConsoleIo` so dispatch stays testable.
//! `StdIo` is the real thing, `MemoryIo` captures everything for tests.

use std::env;
use std::io::{self, Write};

/// Argument stream plus output/error sinks for one invocation.
pub trait ConsoleIo {
    /// Token sequence for the current invocation.
    fn arguments(&self) -> &[String];

    /// Prepend a token to the argument stream (help-fallback rule).
    fn unshift_argument(&mut self, token: String);

    /// Write a line to the output stream.
    fn out(&mut self, line: &str);

    /// Write a line to the error stream.
    fn error(&mut self, line: &str);
}

/// Process-backed I/O: argv, stdout, stderr.
#[derive(Debug)]
pub struct StdIo {
    args: Vec<String>,
}

impl StdIo {
    /// Capture the process argument vector (without the program name).
    pub fn from_env() -> Self {
        Self {
            args: env::args().skip(1).collect(),
        }
    }

    /// Build from an explicit argument vector.
    pub fn with_args(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl ConsoleIo for StdIo {
    fn arguments(&self) -> &[String] {
        &self.args
    }

    fn unshift_argument(&mut self, token: String) {
        self.args.insert(0, token);
    }

    fn out(&mut self, line: &str) {
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
    }

    fn error(&mut self, line: &str) {
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", line);
        let _ = stderr.flush();
    }
}

/// In-memory I/O capturing both streams. Test seam.
#[derive(Debug, Default)]
pub struct MemoryIo {
    args: Vec<String>,
    out: Vec<String>,
    err: Vec<String>,
}

impl MemoryIo {
    /// Build with the given argument tokens.
    pub fn new(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    /// Lines written to the output stream so far.
    pub fn output(&self) -> &[String] {
        &self.out
    }

    /// Lines written to the error stream so far.
    pub fn errors(&self) -> &[String] {
        &self.err
    }
}

impl ConsoleIo for MemoryIo {
    fn arguments(&self) -> &[String] {
        &self.args
    }

    fn unshift_argument(&mut self, token: String) {
        self.args.insert(0, token);
    }

    fn out(&mut self, line: &str) {
        self.out.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.err.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_io_arguments() {
        let io = MemoryIo::new(&["help", "version"]);
        assert_eq!(io.arguments(), &["help".to_string(), "version".to_string()]);
    }

    #[test]
    fn test_unshift_prepends() {
        let mut io = MemoryIo::new(&["version"]);
        io.unshift_argument("help".to_string());
        assert_eq!(io.arguments(), &["help".to_string(), "version".to_string()]);
    }

    #[test]
    fn test_memory_io_captures_streams() {
        let mut io = MemoryIo::new(&[]);
        io.out("hello");
        io.error("oops");

        assert_eq!(io.output(), &["hello".to_string()]);
        assert_eq!(io.errors(), &["oops".to_string()]);
    }

    #[test]
    fn test_std_io_with_args() {
        let io = StdIo::with_args(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(io.arguments().len(), 2);
    }
}
