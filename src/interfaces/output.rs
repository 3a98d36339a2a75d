use clap::ValueEnum;

/// How spelled amounts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line.
    #[default]
    Text,
    /// `amount,words` records with a header row.
    Csv,
    /// One JSON object per line.
    Json,
}
