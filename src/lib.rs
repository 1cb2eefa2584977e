//! tiller - command routing and local authentication toolkit
//!
//! Two cooperating cores: a console command dispatcher (`console`) that
//! resolves argument vectors against a command tree and maps outcomes to
//! POSIX exit codes, and an authentication pipeline (`auth`) that checks
//! credentials against pluggable methods.

pub mod auth;
pub mod console;
pub mod observability;
