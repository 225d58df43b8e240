use anyhow::{Context, Result};
use booklet_impose::{BookletOptions, create_booklet, validate_input_path};
use clap::Parser;
use clap::error::ErrorKind;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "booklet",
    about = "Impose a PDF into a folded, double-sided booklet",
    version
)]
struct Cli {
    /// Input PDF file; the booklet is written next to it as <name>_booklet.pdf
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// JSON options file (output path, page size policy)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Wrong arguments always exit with 1, clap's own code is 2.
            // A closed stderr leaves nothing else to report to.
            err.print().ok();
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    validate_input_path(&cli.input).context("input must be a valid PDF file path")?;

    let mut options = match &cli.config {
        Some(path) => BookletOptions::load(path)
            .await
            .with_context(|| format!("failed to read options from {}", path.display()))?,
        None => BookletOptions::default(),
    };
    options.input_file = cli.input.clone();

    let (output, stats) = create_booklet(&options)
        .await
        .with_context(|| format!("failed to create booklet from {}", cli.input.display()))?;

    info!("Output sheets: {}", stats.output_sheets);
    info!("Sheets of paper: {}", stats.paper_sheets);

    println!("Booklet PDF saved to: {}", output.display());
    Ok(())
}
