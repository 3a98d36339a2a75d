use crate::error::{Result, SpellError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A signed dollar amount to be spelled out.
///
/// Wraps `rust_decimal::Decimal` so that two fractional digits are always
/// represented exactly. Digits past the cent are truncated, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DollarAmount(Decimal);

impl DollarAmount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Whole dollars, truncated toward zero with the sign kept.
    pub fn whole_dollars(&self) -> Result<i128> {
        self.0
            .trunc()
            .to_i128()
            .ok_or_else(|| SpellError::AmountOutOfRange(self.0.to_string()))
    }

    /// Cents in `0..=99`, taken from the absolute value.
    pub fn cents(&self) -> Result<u8> {
        let total_cents = self
            .0
            .abs()
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| SpellError::AmountOutOfRange(self.0.to_string()))?
            .trunc();
        (total_cents % Decimal::ONE_HUNDRED)
            .to_u8()
            .ok_or_else(|| SpellError::AmountOutOfRange(self.0.to_string()))
    }
}

impl From<i64> for DollarAmount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for DollarAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses decimal text such as `1849`, `-1000.01`, `$1,849.00` or `1_000`.
///
/// Thousands separators (`,` or `_`) are only accepted between complete
/// three-digit groups of the integer part, so `1,50` and `1.2,5` are rejected.
impl FromStr for DollarAmount {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SpellError::InvalidAmount(s.to_string());
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let body = unsigned.strip_prefix('$').unwrap_or(unsigned);
        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };

        const SEPARATORS: [char; 2] = [',', '_'];
        if fraction.is_some_and(|f| f.contains(SEPARATORS)) {
            return Err(invalid());
        }
        if integer.contains(SEPARATORS) {
            let mut chunks = integer.split(SEPARATORS);
            let leading = chunks.next().unwrap_or_default();
            if leading.is_empty() || leading.len() > 3 || chunks.any(|chunk| chunk.len() != 3) {
                return Err(invalid());
            }
        }

        let mut digits: String = integer.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        if let Some(fraction) = fraction {
            digits.push('.');
            digits.push_str(fraction);
        }

        if digits.is_empty() || digits.starts_with(['-', '+']) {
            return Err(invalid());
        }

        let value = Decimal::from_str(&digits).map_err(|_| invalid())?;
        Ok(Self(if negative { -value } else { value }))
    }
}
