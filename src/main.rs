//! tiller CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates dispatch to the console module
//! 2. Prints configuration errors to stderr
//! 3. Exits with the dispatched code
//!
//! All logic lives in the console module; main.rs only forwards the result.

fn main() {
    match tiller::console::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
