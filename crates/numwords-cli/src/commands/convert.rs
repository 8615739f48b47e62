//! Convert command - spell out the number in lines given directly or on stdin.

use std::io;

use clap::Args;
use tracing::{debug, info};

use numwords_core::batch::{convert_reader, BatchOptions};
use numwords_core::{Conversion, OutputFormat};

use super::format::format_conversions;
use super::load_config;

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Lines to convert (default: read lines from stdin)
    lines: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Prefix each result with its input line (text format)
    #[arg(long)]
    show_input: bool,

    /// Skip blank lines instead of reporting them as invalid
    #[arg(long)]
    skip_blank: bool,
}

pub async fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut options = BatchOptions::from(&config.input);
    options.skip_blank_lines |= args.skip_blank;

    let conversions = if args.lines.is_empty() {
        debug!("Reading lines from stdin");
        convert_reader(io::stdin().lock(), options)?
    } else {
        args.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !(options.skip_blank_lines && line.trim().is_empty()))
            .map(|(index, line)| Conversion::from_line(index + 1, line.as_str()))
            .collect()
    };

    info!(
        "Converted {} lines, {} invalid",
        conversions.len(),
        conversions.iter().filter(|c| !c.valid).count()
    );

    let format = args.format.unwrap_or(config.output.format);
    let include_input = args.show_input || config.output.include_input;

    print!("{}", format_conversions(&conversions, format, include_input)?);

    Ok(())
}
