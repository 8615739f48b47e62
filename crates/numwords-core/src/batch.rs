//! Line-oriented conversion of whole inputs.
//!
//! Each input line is converted independently and results keep input order.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::models::config::InputConfig;
use crate::models::conversion::Conversion;

/// Options for reading input lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Drop blank lines instead of reporting them as invalid.
    pub skip_blank_lines: bool,
}

impl From<&InputConfig> for BatchOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            skip_blank_lines: config.skip_blank_lines,
        }
    }
}

/// Convert every line read from `reader`.
pub fn convert_reader<R: BufRead>(reader: R, options: BatchOptions) -> Result<Vec<Conversion>> {
    let mut conversions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if options.skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        conversions.push(Conversion::from_line(index + 1, line));
    }

    debug!(
        "Converted {} lines ({} valid)",
        conversions.len(),
        conversions.iter().filter(|c| c.valid).count()
    );

    Ok(conversions)
}

/// Convert every line of an in-memory text.
pub fn convert_text(text: &str, options: BatchOptions) -> Vec<Conversion> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !(options.skip_blank_lines && line.trim().is_empty()))
        .map(|(index, line)| Conversion::from_line(index + 1, line))
        .collect()
}

/// Write one result per line.
pub fn write_text<W: Write>(
    mut writer: W,
    conversions: &[Conversion],
    include_input: bool,
) -> Result<()> {
    for conversion in conversions {
        if include_input {
            writeln!(writer, "{} => {}", conversion.input, conversion.output)?;
        } else {
            writeln!(writer, "{}", conversion.output)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INPUT: &str = "The pump is 536 deep underground.\n\
                         \n\
                         We processed 9121 records.\n\
                         500hrs\n";

    #[test]
    fn test_convert_reader_keeps_order() {
        let conversions = convert_reader(INPUT.as_bytes(), BatchOptions::default()).unwrap();
        let outputs: Vec<&str> = conversions.iter().map(|c| c.output.as_str()).collect();
        assert_eq!(
            outputs,
            vec![
                "five hundred and thirty-six",
                "number invalid",
                "nine thousand, one hundred and twenty-one",
                "number invalid",
            ]
        );
        assert_eq!(conversions[2].line, 3);
    }

    #[test]
    fn test_skip_blank_lines() {
        let options = BatchOptions {
            skip_blank_lines: true,
        };
        let conversions = convert_reader(INPUT.as_bytes(), options).unwrap();
        assert_eq!(conversions.len(), 3);
        // Line numbers still refer to the source.
        assert_eq!(conversions[1].line, 3);
    }

    #[test]
    fn test_convert_text_matches_reader() {
        let options = BatchOptions::default();
        assert_eq!(
            convert_text(INPUT, options),
            convert_reader(INPUT.as_bytes(), options).unwrap()
        );
    }

    #[test]
    fn test_write_text() {
        let conversions = convert_text("1\n#2", BatchOptions::default());

        let mut out = Vec::new();
        write_text(&mut out, &conversions, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\nnumber invalid\n");

        let mut out = Vec::new();
        write_text(&mut out, &conversions, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 => one\n#2 => number invalid\n"
        );
    }
}
