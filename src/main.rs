//! mdpage CLI - render a markdown document into a styled standalone HTML page

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mdpage::{Options, Shell};
use tracing_subscriber::EnvFilter;

/// Source document converted when no input is given.
const DEFAULT_INPUT: &str = "DATA_PERMISSION_MANAGEMENT_SYSTEM.md";

/// Render a markdown document into a styled standalone HTML page.
#[derive(Parser)]
#[command(name = "mdpage", version, about)]
struct Cli {
    /// Markdown source file.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output HTML file (default: INPUT with an .html extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (default: first level-1 heading).
    #[arg(long)]
    title: Option<String>,

    /// Value of the <html lang> attribute.
    #[arg(long, default_value = mdpage::document::DEFAULT_LANG)]
    lang: String,

    /// HTML-escape code blocks and link/image attributes.
    #[arg(long)]
    escape_html: bool,

    /// Log pipeline details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Convert(#[from] mdpage::Error),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));
    let options = Options {
        escape_html: cli.escape_html,
    };
    let shell = Shell {
        title: cli.title,
        lang: cli.lang,
    };

    let conversion = mdpage::convert_file(&cli.input, &output, &options, &shell)?;

    let name = conversion.output.file_name().map_or_else(
        || conversion.output.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "HTML file generated: {name}")?;
    writeln!(
        stdout,
        "Open it in a browser and use the browser's print function to export it as PDF."
    )?;

    Ok(())
}
