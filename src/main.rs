// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use profile_extractor::extractors::{self, Source};
use profile_extractor::input;
use profile_extractor::utils::{self, line_debug, AppError};

/// Extract names, locations and job titles from copy-pasted sourcing-tool text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tool the text was copied from (indeed, signalhire, linkedin_xray)
    #[arg(short, long, default_value = "indeed")]
    source: String,

    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Debug mode - print the per-line classification and parser events to stderr
    #[arg(short, long)]
    debug: bool,

    /// Maximum input size in bytes (default: MAX_INPUT_BYTES or 2 MiB)
    #[arg(long)]
    max_input_bytes: Option<usize>,
}

#[tokio::main]
async fn main() {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (RUST_LOG wins over --debug)
    utils::logging::setup_logging(args.debug);
    tracing::debug!("Starting extraction for args: {:?}", args);

    if let Err(e) = run(args).await {
        tracing::error!("Extraction run failed: {}", e);
        eprintln!("error: {}", e.public_message());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let source: Source = args.source.parse()?;
    let limit = input::resolve_max_input_bytes(args.max_input_bytes);
    if limit == 0 {
        return Err(AppError::Config("max input size must be greater than zero".to_string()));
    }

    // 3. Read and validate the payload
    let raw = input::read_input(args.input.as_deref()).await?;
    let text = input::validate_input(&raw, limit)?;
    tracing::info!("Extracting {} bytes as {}", text.len(), source);

    if args.debug {
        let annotated = line_debug::annotate_lines(text, source);
        eprint!("{}", line_debug::render_annotations(&annotated));
    }

    // 4. Extract
    let result = extractors::extract(text, source);
    tracing::info!(
        "Extracted {} people ({} unique names)",
        result.people.len(),
        result.names.len()
    );

    // 5. Emit JSON on stdout
    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{json}");

    Ok(())
}
