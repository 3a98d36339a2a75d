use super::amount::DollarAmount;
use crate::error::Result;

/// Turns a dollar amount into its English sentence.
pub trait Speller: Send + Sync {
    fn spell(&self, amount: DollarAmount) -> Result<String>;
}

pub type SpellerBox = Box<dyn Speller>;
