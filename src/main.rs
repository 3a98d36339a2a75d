use clap::Parser;
use dollarwords::application::formatter::DollarsAndCents;
use dollarwords::domain::amount::DollarAmount;
use dollarwords::domain::ports::{Speller, SpellerBox};
use dollarwords::interfaces::csv::amount_reader::AmountReader;
use dollarwords::interfaces::csv::spelling_writer::{SpellingRecord, SpellingWriter};
use dollarwords::interfaces::output::OutputFormat;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amounts to spell out, e.g. 1849 or -1000.01
    #[arg(allow_negative_numbers = true)]
    amounts: Vec<String>,

    /// CSV file with an `amount` column. Use `-` for stdin.
    #[arg(long, conflicts_with = "amounts")]
    input: Option<PathBuf>,

    /// Output format. Defaults to text for amounts, csv for --input.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let speller: SpellerBox = Box::new(DollarsAndCents::new());
    let stdout = io::stdout();

    if let Some(input) = cli.input {
        let source: Box<dyn Read> = if input.as_os_str() == "-" {
            Box::new(io::stdin())
        } else {
            Box::new(File::open(&input).into_diagnostic()?)
        };
        let mut writer =
            SpellingWriter::new(stdout.lock(), cli.format.unwrap_or(OutputFormat::Csv));

        // Bad rows are logged and skipped
        for (index, result) in AmountReader::new(source).amounts().enumerate() {
            let row = index + 1;
            let record = result.and_then(|amount| {
                speller.spell(amount).map(|words| SpellingRecord { amount, words })
            });
            match record {
                Ok(record) => writer.write(&record).into_diagnostic()?,
                Err(e) => tracing::warn!(row, error = %e, "skipping amount"),
            }
        }
        writer.flush().into_diagnostic()?;
        return Ok(());
    }

    if cli.amounts.is_empty() {
        miette::bail!("no amounts given; pass one or more AMOUNT values or --input <PATH>");
    }

    let mut writer = SpellingWriter::new(stdout.lock(), cli.format.unwrap_or_default());
    for text in &cli.amounts {
        let amount: DollarAmount = text.parse().into_diagnostic()?;
        let words = speller.spell(amount).into_diagnostic()?;
        writer
            .write(&SpellingRecord { amount, words })
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
