use crate::domain::amount::DollarAmount;
use crate::error::Result;
use crate::interfaces::output::OutputFormat;
use serde::Serialize;
use std::io::Write;

/// An amount paired with its English spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellingRecord {
    pub amount: DollarAmount,
    pub words: String,
}

enum Sink<W: Write> {
    Text(W),
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes spelled amounts in the chosen `OutputFormat`.
pub struct SpellingWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> SpellingWriter<W> {
    pub fn new(destination: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Text => Sink::Text(destination),
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(destination)),
            OutputFormat::Json => Sink::Json(destination),
        };
        Self { sink }
    }

    pub fn write(&mut self, record: &SpellingRecord) -> Result<()> {
        match &mut self.sink {
            Sink::Text(out) => writeln!(out, "{}", record.words)?,
            Sink::Csv(writer) => writer.serialize(record)?,
            Sink::Json(out) => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Text(out) | Sink::Json(out) => out.flush()?,
            Sink::Csv(writer) => writer.flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record() -> SpellingRecord {
        SpellingRecord {
            amount: DollarAmount::new(dec!(1.01)),
            words: "one dollar and one cent".to_string(),
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = SpellingWriter::new(&mut buffer, format);
            writer.write(&record()).unwrap();
            writer.flush().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(OutputFormat::Text), "one dollar and one cent\n");
    }

    #[test]
    fn test_csv_output_has_header() {
        assert_eq!(
            render(OutputFormat::Csv),
            "amount,words\n1.01,one dollar and one cent\n"
        );
    }

    #[test]
    fn test_json_lines_output() {
        let output = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["amount"], "1.01");
        assert_eq!(value["words"], "one dollar and one cent");
    }
}
