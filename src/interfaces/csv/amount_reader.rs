use crate::domain::amount::DollarAmount;
use crate::error::{Result, SpellError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct AmountRecord {
    amount: String,
}

/// Reads amounts from a CSV source with an `amount` header column.
///
/// Other columns are ignored. Amounts are kept as text until parsed so that
/// currency notation such as `$1,849.00` is accepted.
pub struct AmountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AmountReader<R> {
    /// Creates a new `AmountReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses amounts, one per row.
    pub fn amounts(self) -> impl Iterator<Item = Result<DollarAmount>> {
        self.reader.into_deserialize().map(|result| {
            let record: AmountRecord = result.map_err(SpellError::from)?;
            record.amount.parse()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "amount\n1849\n1.01\n\"$1,000.50\"";
        let reader = AmountReader::new(data.as_bytes());
        let results: Vec<Result<DollarAmount>> = reader.amounts().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(
            *results[0].as_ref().unwrap(),
            DollarAmount::new(dec!(1849))
        );
        assert_eq!(
            *results[2].as_ref().unwrap(),
            DollarAmount::new(dec!(1000.50))
        );
    }

    #[test]
    fn test_reader_extra_columns_ignored() {
        let data = "id, amount, memo\n7, 106, rent";
        let reader = AmountReader::new(data.as_bytes());
        let results: Vec<Result<DollarAmount>> = reader.amounts().collect();

        assert_eq!(
            *results[0].as_ref().unwrap(),
            DollarAmount::new(dec!(106))
        );
    }

    #[test]
    fn test_reader_bad_row_does_not_stop_stream() {
        let data = "amount\nnot_a_number\n5";
        let reader = AmountReader::new(data.as_bytes());
        let results: Vec<Result<DollarAmount>> = reader.amounts().collect();

        assert!(matches!(results[0], Err(SpellError::InvalidAmount(_))));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_missing_column() {
        let data = "value\n5";
        let reader = AmountReader::new(data.as_bytes());
        let results: Vec<Result<DollarAmount>> = reader.amounts().collect();

        assert!(matches!(results[0], Err(SpellError::CsvError(_))));
    }
}
