use anyhow::{Context, Result};
use clap::Parser;
use mscons_processor::cli::{Args, setup_logging};
use mscons_processor::models::ProcessingStats;
use mscons_processor::processor::DocumentProcessor;
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = run(&args) => result,
            signal = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                signal
                    .context("Failed to listen for CTRL+C")
                    .and_then(|_| Err(anyhow::anyhow!("Processing interrupted by user")))
            }
        }
    });

    match result {
        Ok(stats) if stats.files_failed > 0 => process::exit(2),
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<ProcessingStats> {
    let output_path = args.get_output_path();
    let mut processor = DocumentProcessor::new(args.input_path.clone(), Some(output_path))
        .with_context(|| format!("Cannot read input {}", args.input_path.display()))?
        .with_config(args.to_config());

    let stats = processor.process().await?;
    Ok(stats)
}
