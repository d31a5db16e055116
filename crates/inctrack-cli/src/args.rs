//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Simple include tracker.
///
/// Counts (or lists) every header transitively pulled in by quoted
/// `#include "..."` directives, resolving names against the headers
/// (`.h`, `.inl`) found under DIRECTORY.
///
/// Examples:
///   inctrack src/Engine.h src              # count with the default depth
///   inctrack src/Engine.h src --depth=0    # follow includes without a limit
///   inctrack src/Engine.h src --list       # print every included header
#[derive(Parser, Debug)]
#[command(name = "inctrack")]
#[command(version)]
#[command(about, long_about)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Header to start from (must be an existing `.h` file)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory to check for headers
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Recursion depth of scanning. 0 or less for infinite. Default = 5
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// List all files that get transitively included
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Follow symbolic links while indexing DIRECTORY
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What to print once the traversal is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Summary,
    List,
    Json,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.list {
            OutputMode::List
        } else {
            OutputMode::Summary
        }
    }
}
