//! composedot command-line interface.
//!
//! Pipeline: read compose file → parse → build graph → render DOT.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use composedot_core::load_config;
use composedot_dot::render_compose;
use composedot_error::Result;

/// Options for running composedot.
#[derive(Debug, Clone, Default)]
pub struct ComposeDotOptions {
    /// Compose file to convert.
    pub input: PathBuf,
    /// Graph name written after `digraph`; empty for an anonymous graph.
    pub project: String,
}

impl ComposeDotOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            project: String::new(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }
}

/// Main entry point: returns the DOT text for `opts.input`.
///
/// Nothing is written anywhere; the caller decides where the output goes,
/// so a failed run never leaves partial output behind.
pub fn run_main(opts: &ComposeDotOptions) -> Result<String> {
    let parse_start = Instant::now();
    let config = load_config(&opts.input)?;
    info!(
        "Parsing: {:.3}s ({} services, {} networks, {} volumes)",
        parse_start.elapsed().as_secs_f64(),
        config.services.len(),
        config.networks.len(),
        config.volumes.len()
    );

    let render_start = Instant::now();
    let output = render_compose(&opts.project, &config)?;
    info!(
        "Graph rendering: {:.3}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(output)
}
