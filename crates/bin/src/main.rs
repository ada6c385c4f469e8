use std::io::Read;

use clap::Parser;
use hashpath::Value;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::Cli;

/// Read the input document from `--input`, or stdin when none is given.
fn read_input(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = match &cli.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(Value::from(json))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays a clean document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hashpath=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = read_input(&cli)?;
    commands::run(&cli.command, data, cli.format)
}
