//! Exit-code normalization and the process-termination seam.
//!
//! Process termination is irreversible, so it lives behind a single trait
//! and is the last action a dispatch takes. Tests swap in `RecordedExit`.

use std::cell::Cell;
use std::rc::Rc;

/// Clamp an exit code into the POSIX range: anything above 255, and the -1
/// sentinel, collapse to 255.
pub fn normalize_code(code: i32) -> i32 {
    if code > 255 || code == -1 {
        255
    } else {
        code
    }
}

/// The console's single seam for terminating the process.
pub trait ExitRequester {
    /// Act on a request to terminate with `code`.
    fn request_exit(&self, code: i32);
}

/// Terminates the current process.
#[derive(Debug, Default)]
pub struct ProcessExit;

impl ExitRequester for ProcessExit {
    fn request_exit(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Records the requested exit code instead of terminating.
///
/// Clones share the recorded value, so a test can keep one clone and hand
/// the other to the console.
#[derive(Debug, Clone, Default)]
pub struct RecordedExit {
    code: Rc<Cell<Option<i32>>>,
}

impl RecordedExit {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last requested exit code, if any.
    pub fn requested(&self) -> Option<i32> {
        self.code.get()
    }
}

impl ExitRequester for RecordedExit {
    fn request_exit(&self, code: i32) {
        self.code.set(Some(code));
    }
}
