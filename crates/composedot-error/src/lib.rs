//! # composedot-error
//!
//! Unified error handling for composedot.
//!
//! - **ErrorKind**: what went wrong (usage, I/O, parse, graph construction)
//! - **Error Context**: where it went wrong, as key/value pairs
//! - **Error Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use composedot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "expected a mapping")
//!         .with_operation("config::parse")
//!         .with_context("path", "docker-compose.yml"))
//! }
//! ```
//!
//! Every error is fatal to a run. `ErrorKind::exit_code` gives the process
//! status the binary exits with.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using composedot Error
pub type Result<T> = std::result::Result<T, Error>;
