use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use btconfig_core::{
    BLUETOOTH_UUIDS, DEFAULT_CONFIG_PATH, DEFAULT_RECORD_DEPTH, Report, ScanOptions, lookup,
    render_text, scan_config_file,
};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BTCONFIG_BUILD_COMMIT"),
    ", ",
    env!("BTCONFIG_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "btconfig")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline inspector for Bluetooth pairing databases (Bluedroid bt_config.xml).",
    long_about = None,
    after_help = "Examples:\n  btconfig scan bt_config.xml\n  btconfig scan bt_config.xml --json --pretty\n  btconfig scan bt_config.xml -o report.json --strict\n  btconfig uuid 110a 1812"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode paired device records and report address conflicts.
    #[command(alias = "inspect")]
    Scan(ScanArgs),
    /// Resolve 16-bit UUIDs to their assigned names.
    Uuid {
        /// Hexadecimal values, with or without a 0x prefix
        #[arg(required = true)]
        values: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Path to the pairing database (a glob must match exactly one file)
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    input: PathBuf,

    /// Write the JSON report to a file instead of printing text
    #[arg(short = 'o', long, conflicts_with = "json")]
    report: Option<PathBuf>,

    /// Print the JSON report to stdout instead of text
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if address conflicts are present
    #[arg(long)]
    strict: bool,

    /// Attribute holding element tags (default: each element's first attribute)
    #[arg(long, value_name = "NAME")]
    tag_attribute: Option<String>,

    /// Element depth that starts a device record
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_RECORD_DEPTH)]
    record_depth: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => cmd_scan(args),
        Commands::Uuid { values } => cmd_uuid(&values),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_scan(args: ScanArgs) -> Result<(), CliError> {
    let input = resolve_input_path(&args.input)?;
    validate_input_file(&input)?;

    if let Some(report_path) = args.report.as_ref() {
        ensure_distinct_output(&input, report_path)?;
    }

    let options = ScanOptions {
        tag_attribute: args.tag_attribute.clone(),
        record_depth: args.record_depth,
    };
    tracing::debug!(input = %input.display(), ?options, "scanning pairing database");
    let rep = scan_config_file(&input, &options).context("bt_config scan failed")?;

    if let Some(report_path) = args.report.as_ref() {
        let json = serialize_report(&rep, args.pretty, args.compact)?;
        if let Some(parent) = report_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
        if !args.quiet {
            eprintln!("OK: report written -> {}", report_path.display());
        }
    } else if args.json {
        println!("{}", serialize_report(&rep, args.pretty, args.compact)?);
    } else {
        print!("{}", render_text(&rep));
    }

    if let Some(parse_error) = rep.parse_error.as_ref() {
        return Err(CliError::new(
            format!("failed to parse {}: {}", input.display(), parse_error),
            Some("results cover only the part of the document read before the error".to_string()),
        ));
    }
    if args.strict && !rep.conflicts.is_empty() {
        return Err(CliError::new(
            format!("address conflicts detected ({})", rep.conflicts.len()),
            Some("run without --strict to inspect the conflicting addresses".to_string()),
        ));
    }
    Ok(())
}

fn cmd_uuid(values: &[String]) -> Result<(), CliError> {
    for value in values {
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);
        let uuid = u16::from_str_radix(digits, 16).map_err(|_| {
            CliError::new(
                format!("invalid UUID '{}'", value),
                Some("expected a 16-bit hexadecimal value such as 110a".to_string()),
            )
        })?;
        println!(
            "{:04x} {}",
            uuid,
            lookup(BLUETOOTH_UUIDS, uuid).unwrap_or("Unknown")
        );
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(input: &Path, report_path: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_dir = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent).ok(),
        _ => fs::canonicalize(".").ok(),
    };
    let Some(report_dir) = report_dir else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some(format!(
                "pass the path to a bt_config.xml file (default: {DEFAULT_CONFIG_PATH})"
            )),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass the path to a bt_config.xml file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single pairing database, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
