//! # Console Module
//!
//! Command routing and execution for console applications:
//! - a tree of named commands rooted at a single nameless root
//! - token resolution (deepest prefix match, leftover tokens as arguments)
//! - a dispatch pipeline that catches handler errors exactly once and maps
//!   them to POSIX exit codes
//! - pluggable I/O, help rendering, and process-termination seams

pub mod application;
pub mod command;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod exit;
pub mod io;
pub mod router;

pub use application::Console;
pub use command::{Command, CommandHandler, CommandId, CommandTree, HandlerContext};
pub use commands::{build_console, run};
pub use config::ConsoleConfig;
pub use descriptor::{DescriptorHelper, TextDescriptor};
pub use errors::{ConsoleError, ConsoleResult, HandlerError};
pub use exit::{normalize_code, ExitRequester, ProcessExit, RecordedExit};
pub use io::{ConsoleIo, MemoryIo, StdIo};
pub use router::Resolution;
