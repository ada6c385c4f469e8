//! Read-only commands: extract, get, check and dimensions.

use hashpath::{PathExpr, Value, hash};
use serde::Serialize;

use crate::cli::{GetArgs, PathArgs};
use crate::commands::{parse_value, size};
use crate::output::{OutputFormat, plural, print_document};

/// Run the `extract` command
pub fn extract(
    args: &PathArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    PathExpr::parse_strict(&args.path)?;
    let found = hash::extract(data, &args.path)?;
    let count = if args.path.is_empty() { 1 } else { size(&found) };
    print_document(&found, &format!("{count} match{}", es(count)), format)?;
    Ok(())
}

fn es(count: usize) -> &'static str {
    if count == 1 { "" } else { "es" }
}

/// Run the `get` command
pub fn get(
    args: &GetArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let default = args.default.as_deref().map_or(Value::Null, parse_value);
    let found = hash::get(data, args.path.as_str(), default)?;
    print_document(&found, found.type_name(), format)?;
    Ok(())
}

/// Run the `check` command
pub fn check(
    args: &PathArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    PathExpr::parse_strict(&args.path)?;
    let exists = hash::check(data, &args.path)?;
    match format {
        OutputFormat::Human => {
            let verdict = if exists { "matches" } else { "does not match" };
            println!("{} {verdict}", args.path);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&exists)?),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Dimensions {
    dimensions: usize,
    max_dimensions: usize,
}

/// Run the `dimensions` command
pub fn dimensions(data: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let report = Dimensions {
        dimensions: hash::dimensions(data)?,
        max_dimensions: hash::max_dimensions(data)?,
    };
    match format {
        OutputFormat::Human => {
            println!(
                "Dimensions:      {} level{}",
                report.dimensions,
                plural(report.dimensions)
            );
            println!(
                "Max dimensions:  {} level{}",
                report.max_dimensions,
                plural(report.max_dimensions)
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(())
}
