//! api-validators CLI entry point
//!
//! Runs a single validation keyword against JSON arguments and reports the
//! outcome through the exit status:
//!
//! - `0`: the keyword passed; its return value is printed as JSON.
//! - `1`: assertion failure; the message goes to stderr.
//! - `2`: anything else (unknown keyword, bad arguments, unreadable file).

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use api_validators_core::{Keyword, KeywordError, KeywordInfo, LIBRARY_VERSION};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "api-validators", version, about = "Run API assertion keywords from the command line")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available keywords
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one keyword
    Run {
        /// Keyword name, e.g. "Validate Email Format" or validate_email_format
        keyword: String,

        /// Positional arguments. Each is parsed as JSON, falling back to a
        /// plain string; `@path` reads the JSON from a file.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command {
        Commands::List { json } => match list(json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::from(2)
            }
        },
        Commands::Run { keyword, args } => run(&keyword, &args),
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        let infos: Vec<KeywordInfo> = Keyword::ALL.into_iter().map(Keyword::info).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("api-validators keyword library {LIBRARY_VERSION}");
    println!();
    for keyword in Keyword::ALL {
        println!("{:<38} {}", keyword.name(), keyword.arguments().join(", "));
        println!("    {}", keyword.summary());
    }
    Ok(())
}

fn run(name: &str, raw_args: &[String]) -> ExitCode {
    let outcome = resolve_and_run(name, raw_args);

    match outcome {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(2)
            }
        },
        Err(e) => match e.downcast_ref::<KeywordError>() {
            Some(KeywordError::Assertion(failure)) => {
                eprintln!("FAIL: {failure}");
                ExitCode::from(1)
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::from(2)
            }
        },
    }
}

fn resolve_and_run(name: &str, raw_args: &[String]) -> Result<Value> {
    let keyword: Keyword = name.parse()?;
    let args = raw_args
        .iter()
        .map(|raw| parse_argument(raw))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(keyword = keyword.name(), args = args.len(), "running keyword");
    Ok(keyword.run(&args)?)
}

/// `@path` loads JSON from a file; anything else is JSON if it parses and a
/// plain string otherwise.
fn parse_argument(raw: &str) -> Result<Value> {
    if let Some(path) = raw.strip_prefix('@') {
        return read_json_file(Path::new(path));
    }
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

fn read_json_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_argument_prefers_json() {
        assert_eq!(parse_argument("1000").unwrap(), json!(1000));
        assert_eq!(parse_argument(r#"{"elapsed": 0.5}"#).unwrap(), json!({"elapsed": 0.5}));
        assert_eq!(parse_argument(r#""quoted""#).unwrap(), json!("quoted"));
    }

    #[test]
    fn test_parse_argument_falls_back_to_string() {
        assert_eq!(parse_argument("user@example.com").unwrap(), json!("user@example.com"));
        assert_eq!(parse_argument("user.address.city").unwrap(), json!("user.address.city"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = parse_argument("@/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
