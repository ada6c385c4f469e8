//! Commands that produce a new document from the input.

use hashpath::{PathExpr, SortDirection, SortOptions, Value, hash};

use crate::cli::{CombineArgs, InsertArgs, PathArgs, SeparatorArgs, SortArgs};
use crate::commands::{parse_value, size};
use crate::output::{OutputFormat, plural, print_document, print_table};

/// Run the `insert` command
pub fn insert(
    args: &InsertArgs,
    data: Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    PathExpr::parse_strict(&args.path)?;
    let out = hash::insert(data, &args.path, parse_value(&args.value))?;
    print_document(&out, "", format)?;
    Ok(())
}

/// Run the `remove` command
pub fn remove(
    args: &PathArgs,
    data: Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    PathExpr::parse_strict(&args.path)?;
    let out = hash::remove(data, &args.path)?;
    print_document(&out, "", format)?;
    Ok(())
}

/// Run the `combine` command
pub fn combine(
    args: &CombineArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = hash::combine(
        data,
        &args.keys,
        args.values.as_deref(),
        args.group.as_deref(),
    )?;
    let count = size(&out);
    let unit = if args.group.is_some() { "group" } else { "key" };
    print_document(&out, &format!("{count} {unit}{}", plural(count)), format)?;
    Ok(())
}

/// Run the `sort` command
pub fn sort(
    args: &SortArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    PathExpr::parse_strict(&args.path)?;
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let options = SortOptions::new()
        .with_direction(direction)
        .with_mode(args.mode.into())
        .ignore_case(args.ignore_case);
    let out = hash::sort(data, &args.path, options)?;
    let count = size(&out);
    print_document(&out, &format!("{count} record{}", plural(count)), format)?;
    Ok(())
}

/// Run the `flatten` command. Human output is a path/value table.
pub fn flatten(
    args: &SeparatorArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = hash::flatten(data, &args.separator)?;
    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = out
                .as_map()
                .into_iter()
                .flat_map(|c| c.iter())
                .map(|(key, value)| -> Result<Vec<String>, serde_json::Error> {
                    Ok(vec![key.to_string(), serde_json::to_string(value)?])
                })
                .collect::<Result<_, _>>()?;
            if rows.is_empty() {
                println!("No values.");
            } else {
                print_table(&["PATH", "VALUE"], &rows);
            }
        }
        OutputFormat::Json => print_document(&out, "", format)?,
    }
    Ok(())
}

/// Run the `expand` command
pub fn expand(
    args: &SeparatorArgs,
    data: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = hash::expand(data, &args.separator)?;
    print_document(&out, "", format)?;
    Ok(())
}

/// Run the `filter` command
pub fn filter(data: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let out = hash::filter(data)?;
    let before = size(&hash::flatten(data, ".")?);
    let dropped = before.saturating_sub(size(&hash::flatten(&out, ".")?));
    print_document(&out, &format!("{dropped} value{} dropped", plural(dropped)), format)?;
    Ok(())
}
