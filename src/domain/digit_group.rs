use crate::domain::words;
use crate::error::{Result, SpellError};

/// Splits a magnitude into base-1000 digit groups, smallest place value first.
///
/// The sequence ends as soon as the remaining magnitude reaches zero, so a
/// magnitude of 0 yields nothing. Callers render zero on their own.
#[derive(Debug, Clone)]
pub struct DigitGroups {
    remaining: u128,
}

impl DigitGroups {
    pub fn new(magnitude: u128) -> Self {
        Self {
            remaining: magnitude,
        }
    }
}

impl Iterator for DigitGroups {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let group = (self.remaining % 1000) as u16;
        self.remaining /= 1000;
        Some(group)
    }
}

/// One chunk of up to three digits, as produced by writing a number with
/// thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    /// 0 for the units group, 1 for thousands, 2 for millions, and so on.
    pub place_index: usize,
    /// Numeric value of the group, 0 through 999.
    pub value: u16,
}

impl DigitGroup {
    pub fn new(place_index: usize, value: u16) -> Self {
        Self { place_index, value }
    }

    pub fn is_units(&self) -> bool {
        self.place_index == 0
    }

    /// Renders this group alone, suffix included. A zero group renders empty.
    ///
    /// The conjunction between hundreds and the remainder only appears in the
    /// units group: 150 reads "one hundred and fifty", but 150,000 reads
    /// "one hundred fifty thousand".
    pub fn render(&self) -> Result<String> {
        if self.value > 999 {
            return Err(SpellError::InvalidDigitGroup(self.value));
        }
        if self.value == 0 {
            return Ok(String::new());
        }
        let suffix = words::suffix(self.place_index).ok_or(SpellError::UnsupportedMagnitude {
            place_index: self.place_index,
        })?;

        let mut tokens: Vec<String> = Vec::with_capacity(6);

        let hundreds = usize::from(self.value / 100);
        if hundreds > 0 {
            tokens.push(words::ONES[hundreds].to_string());
            tokens.push(words::HUNDRED.to_string());
        }

        let remainder = usize::from(self.value % 100);
        if hundreds > 0 && remainder > 0 && self.is_units() {
            tokens.push(words::AND.to_string());
        }

        if remainder >= 20 {
            let mut tens = words::TENS[remainder / 10].to_string();
            let ones = remainder % 10;
            if ones > 0 {
                tens.push('-');
                tens.push_str(words::ONES[ones]);
            }
            tokens.push(tens);
        } else if remainder > 0 {
            tokens.push(words::ONES[remainder].to_string());
        }

        if !self.is_units() {
            tokens.push(suffix.to_string());
        }

        Ok(tokens.join(" "))
    }
}
