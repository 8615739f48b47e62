//! Batch command - convert every line of one or more input files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use numwords_core::batch::{convert_text, BatchOptions};
use numwords_core::{Conversion, OutputFormat};

use super::format::format_conversions;
use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file or glob pattern (default: input.default_path from config)
    input: Option<String>,

    /// Output directory (default: stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (text, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue when an input file cannot be read
    #[arg(long)]
    continue_on_error: bool,

    /// Skip blank lines instead of reporting them as invalid
    #[arg(long)]
    skip_blank: bool,

    /// Prefix each result with its input line (text format)
    #[arg(long)]
    show_input: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    conversions: Option<Vec<Conversion>>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let pattern = args
        .input
        .clone()
        .unwrap_or_else(|| config.input.default_path.display().to_string());

    let mut options = BatchOptions::from(&config.input);
    options.skip_blank_lines |= args.skip_blank;
    let format = args.format.unwrap_or(config.output.format);
    let include_input = args.show_input || config.output.include_input;
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", pattern);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        tokio::fs::create_dir_all(output_dir).await?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = tokio::fs::read_to_string(&path).await;

        match outcome {
            Ok(text) => {
                let conversions = convert_text(&text, options);
                let processing_time_ms = file_start.elapsed().as_millis() as u64;
                debug!("{}: {} lines", path.display(), conversions.len());
                results.push(FileResult {
                    path,
                    conversions: Some(conversions),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let processing_time_ms = file_start.elapsed().as_millis() as u64;
                let error_msg = e.to_string();
                if continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        conversions: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    // Write outputs
    for result in &results {
        let Some(conversions) = &result.conversions else {
            continue;
        };
        let content = format_conversions(conversions, format, include_input)?;

        match &args.output_dir {
            Some(output_dir) => {
                let output_path = output_path_for(output_dir, &result.path, format);
                tokio::fs::write(&output_path, content).await?;
                info!("Wrote output to {}", output_path.display());
            }
            None => print!("{}", content),
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let line_count: usize = results
        .iter()
        .filter_map(|r| r.conversions.as_ref())
        .map(Vec::len)
        .sum();

    eprintln!(
        "{} Processed {} files ({} lines) in {:?}",
        style("✓").green(),
        results.len(),
        line_count,
        start.elapsed()
    );

    if !failed.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn output_path_for(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let output_name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    output_dir.join(format!("{}.{}", output_name, format.extension()))
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "lines",
        "valid",
        "invalid",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(conversions) = &result.conversions {
            let valid = conversions.iter().filter(|c| c.valid).count();
            wtr.write_record([
                filename,
                "success",
                &conversions.len().to_string(),
                &valid.to_string(),
                &(conversions.len() - valid).to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
