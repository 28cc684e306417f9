//! font-shorthand - CSS font shorthand parser

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use font_shorthand::{FontShorthand, ToCss};

#[derive(Parser)]
#[command(name = "font-shorthand")]
#[command(version, about = "Parse CSS font shorthand values", long_about = None)]
#[command(after_help = "EXAMPLES:
    font-shorthand '12px serif'                     Print longhands as JSON
    font-shorthand --css 'serif bold 12px Arial'    Print canonical shorthand
    cat fonts.txt | font-shorthand --pretty          Parse one value per line")]
struct Cli {
    /// Shorthand values to parse (reads lines from stdin if omitted)
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long, conflicts_with = "css")]
    pretty: bool,

    /// Print the canonical shorthand instead of JSON
    #[arg(long)]
    css: bool,

    /// Suppress error messages
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let values = if cli.values.is_empty() {
        match read_stdin() {
            Ok(values) => values,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.values.clone()
    };

    let mut failed = false;
    for value in &values {
        match render(value, &cli) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                failed = true;
                if !cli.quiet {
                    eprintln!("error: {value}: {e}");
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Non-empty lines from stdin, trimmed.
fn read_stdin() -> io::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            values.push(line.to_string());
        }
    }
    Ok(values)
}

fn render(value: &str, cli: &Cli) -> Result<String, String> {
    let font = FontShorthand::parse(value).map_err(|e| e.to_string())?;

    if cli.css {
        return Ok(font.to_css_string());
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&font)
    } else {
        serde_json::to_string(&font)
    };
    json.map_err(|e| e.to_string())
}
