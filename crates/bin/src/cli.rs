//! CLI argument definitions for the hashpath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hashpath::SortMode;

use crate::output::OutputFormat;

/// Comparison used by `sort`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortModeArg {
    /// Numbers numerically, everything else as text
    #[default]
    Regular,
    /// Text with digit runs compared by value
    Natural,
    /// Numbers only, anything else counts as zero
    Numeric,
    /// Bytewise text
    String,
    /// Case folded text
    Locale,
}

impl From<SortModeArg> for SortMode {
    fn from(mode: SortModeArg) -> Self {
        match mode {
            SortModeArg::Regular => SortMode::Regular,
            SortModeArg::Natural => SortMode::Natural,
            SortModeArg::Numeric => SortMode::Numeric,
            SortModeArg::String => SortMode::String,
            SortModeArg::Locale => SortMode::Locale,
        }
    }
}

/// Query and reshape JSON documents with path expressions
#[derive(Parser, Debug)]
#[command(name = "hashpath")]
#[command(about = "hashpath: extract, insert and reshape nested data by path")]
#[command(version)]
pub struct Cli {
    /// JSON document to read; stdin when omitted
    #[arg(short, long, global = true, env = "HASHPATH_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "HASHPATH_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every value matching a path
    Extract(PathArgs),
    /// Read a single value by literal path
    Get(GetArgs),
    /// Write a value at every location a path matches
    Insert(InsertArgs),
    /// Delete every value a path matches
    Remove(PathArgs),
    /// Build a map from the values of two paths
    Combine(CombineArgs),
    /// Sort records by the value at a path
    Sort(SortArgs),
    /// Collapse nested containers into a single level
    Flatten(SeparatorArgs),
    /// Rebuild nested containers from flattened keys
    Expand(SeparatorArgs),
    /// Report whether a path matches anything
    Check(PathArgs),
    /// Drop empty values recursively
    Filter,
    /// Report the nesting depth of the document
    Dimensions,
}

/// A command taking a single path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Path expression, e.g. `{n}.User[age>30].name`
    pub path: String,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Literal dotted path
    pub path: String,

    /// JSON value returned when the path is missing
    #[arg(short, long)]
    pub default: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct InsertArgs {
    /// Path expression to write at
    pub path: String,

    /// JSON value to write; anything that is not JSON is written as text
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct CombineArgs {
    /// Path of the keys
    pub keys: String,

    /// Path of the values; keys map to null when omitted
    pub values: Option<String>,

    /// Path whose values group the pairs
    #[arg(short, long)]
    pub group: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Path to sort by, relative to each record
    pub path: String,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value = "regular")]
    pub mode: SortModeArg,

    /// Compare text case-insensitively
    #[arg(short = 'c', long)]
    pub ignore_case: bool,
}

#[derive(clap::Args, Debug)]
pub struct SeparatorArgs {
    /// Key separator
    #[arg(short, long, default_value = ".")]
    pub separator: String,
}
