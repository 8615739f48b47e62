//! Rendering conversion results in the supported output formats.

use numwords_core::batch::write_text;
use numwords_core::{Conversion, OutputFormat};

pub fn format_conversions(
    conversions: &[Conversion],
    format: OutputFormat,
    include_input: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => format_text(conversions, include_input),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversions)? + "\n"),
        OutputFormat::Csv => format_csv(conversions),
    }
}

fn format_text(conversions: &[Conversion], include_input: bool) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_text(&mut buf, conversions, include_input)?;
    Ok(String::from_utf8(buf)?)
}

fn format_csv(conversions: &[Conversion]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["line", "input", "output", "valid"])?;

    for conversion in conversions {
        wtr.write_record([
            &conversion.line.to_string(),
            &conversion.input,
            &conversion.output,
            &conversion.valid.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numwords_core::batch::{convert_text, BatchOptions};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Conversion> {
        convert_text("We processed 9121 records.\n#1", BatchOptions::default())
    }

    #[test]
    fn test_format_text() {
        let out = format_conversions(&sample(), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "nine thousand, one hundred and twenty-one\nnumber invalid\n");
    }

    #[test]
    fn test_format_csv_quotes_commas() {
        let out = format_conversions(&sample(), OutputFormat::Csv, false).unwrap();
        assert_eq!(
            out,
            "line,input,output,valid\n\
             1,We processed 9121 records.,\"nine thousand, one hundred and twenty-one\",true\n\
             2,#1,number invalid,false\n"
        );
    }

    #[test]
    fn test_format_json() {
        let out = format_conversions(&sample(), OutputFormat::Json, false).unwrap();
        let parsed: Vec<Conversion> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }
}
