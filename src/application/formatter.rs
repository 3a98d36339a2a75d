use crate::domain::amount::DollarAmount;
use crate::domain::english::{magnitude_to_english, to_english};
use crate::domain::ports::Speller;
use crate::domain::words;
use crate::error::Result;

/// Converts a dollar amount into an English sentence of dollars and cents.
///
/// The sign is spoken once, on the dollar phrase. Cents are always unsigned
/// and omitted entirely when zero.
///
/// # Examples
///
/// ```
/// use dollarwords::{spell_dollars_and_cents, DollarAmount};
/// use rust_decimal_macros::dec;
///
/// let words = spell_dollars_and_cents(DollarAmount::new(dec!(1.01))).unwrap();
/// assert_eq!(words, "one dollar and one cent");
/// ```
pub fn spell_dollars_and_cents(amount: DollarAmount) -> Result<String> {
    let dollars = amount.whole_dollars()?;
    let mut response = to_english(dollars)?;
    response.push(' ');
    response.push_str(if dollars.unsigned_abs() == 1 {
        words::DOLLAR
    } else {
        words::DOLLARS
    });

    let cents = amount.cents()?;
    if cents > 0 {
        response.push(' ');
        response.push_str(words::AND);
        response.push(' ');
        response.push_str(&magnitude_to_english(u128::from(cents))?);
        response.push(' ');
        response.push_str(if cents == 1 { words::CENT } else { words::CENTS });
    }

    Ok(response)
}

/// The dollars-and-cents formatter as a `Speller`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DollarsAndCents;

impl DollarsAndCents {
    pub fn new() -> Self {
        Self
    }
}

impl Speller for DollarsAndCents {
    fn spell(&self, amount: DollarAmount) -> Result<String> {
        spell_dollars_and_cents(amount)
    }
}
