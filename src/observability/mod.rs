//! Observability subsystem
//!
//! Structured JSON logging for the console dispatch pipeline.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on dispatch
//! 2. No async or background threads
//! 3. Deterministic output
//! 4. Logging failure never fails the operation being logged

mod logger;

pub use logger::{Logger, Severity};
