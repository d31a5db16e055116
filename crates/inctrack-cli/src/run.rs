//! Orchestration of a single tracker run.

use inctrack_analysis::index::{HeaderIndex, IndexOptions};
use inctrack_analysis::report::{render_json, render_list, render_summary};
use inctrack_analysis::traversal::trace_includes;
use inctrack_core::config::{CliOverrides, InctrackConfig};
use inctrack_core::errors::TrackError;

use crate::args::{Cli, OutputMode};
use crate::validate::{validate_directory, validate_header};

/// Validate inputs, resolve config, index, trace, and render.
/// Returns exactly what should be written to stdout.
pub fn run(cli: &Cli) -> Result<String, TrackError> {
    validate_header(&cli.file)?;
    validate_directory(&cli.directory)?;

    let overrides = CliOverrides {
        depth: cli.depth,
        follow_symlinks: cli.follow_symlinks.then_some(true),
    };
    let config = InctrackConfig::load(&cli.directory, Some(&overrides))?;
    let depth = config.traversal.effective_depth();

    let index = HeaderIndex::build(&cli.directory, &IndexOptions::from(&config.scan))?;
    let closure = trace_includes(&index, &cli.file, depth);

    tracing::info!(
        root = %closure.root,
        %depth,
        headers = closure.count(),
        rounds = closure.stats.rounds,
        "include tracking complete"
    );

    let output = match cli.output_mode() {
        OutputMode::Summary => format!("{}\n", render_summary(&closure)),
        OutputMode::List => render_list(&closure),
        OutputMode::Json => format!("{}\n", render_json(&closure)?),
    };
    Ok(output)
}
