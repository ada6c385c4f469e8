//! Command implementations. Each command receives the parsed input document.

pub mod query;
pub mod reshape;

use hashpath::Value;

use crate::cli::Commands;
use crate::output::OutputFormat;

/// Run `command` against `data`
pub fn run(
    command: &Commands,
    data: Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Extract(args) => query::extract(args, &data, format),
        Commands::Get(args) => query::get(args, &data, format),
        Commands::Check(args) => query::check(args, &data, format),
        Commands::Insert(args) => reshape::insert(args, data, format),
        Commands::Remove(args) => reshape::remove(args, data, format),
        Commands::Combine(args) => reshape::combine(args, &data, format),
        Commands::Sort(args) => reshape::sort(args, &data, format),
        Commands::Flatten(args) => reshape::flatten(args, &data, format),
        Commands::Expand(args) => reshape::expand(args, &data, format),
        Commands::Filter => reshape::filter(&data, format),
        Commands::Dimensions => query::dimensions(&data, format),
    }
}

/// Parse a JSON command line argument, falling back to a text value.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    }
}

/// Number of entries of a container, zero for scalars.
pub fn size(value: &Value) -> usize {
    value.as_indexable().map_or(0, |c| c.len())
}
