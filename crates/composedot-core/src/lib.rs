//! Compose document model for composedot.
//!
//! Reads the subset of a docker-compose file that feeds graph construction
//! and normalizes the loosely typed parts of the schema (scalar coercion,
//! list-or-mapping references, the two shapes of `environment`) into one
//! canonical in-memory shape.
//!
//! # Module Structure
//!
//! - [`model`]: `Configuration`, `Service`, `Network`, `Volume`
//! - [`environment`]: `environment` normalization to `KEY=VALUE` entries
//! - [`parse`]: YAML text / file → `Configuration`

mod de;
pub mod environment;
pub mod model;
pub mod parse;

pub use composedot_error::{Error, ErrorKind, Result};
pub use environment::Environment;
pub use model::{Build, Configuration, Network, Service, Volume};
pub use parse::{load_config, parse_config};
