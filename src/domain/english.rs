//! Integer-to-English composition.
//!
//! Joins rendered digit groups from largest to smallest. Adjacent groups are
//! separated by a comma, except that a units group below one hundred is
//! introduced with "and": 1007 reads "one thousand and seven" while 1849 reads
//! "one thousand, eight hundred and forty-nine".

use crate::domain::digit_group::{DigitGroup, DigitGroups};
use crate::domain::words;
use crate::error::Result;

/// Spells out a signed integer in English.
pub fn to_english(number: i128) -> Result<String> {
    let magnitude = magnitude_to_english(number.unsigned_abs())?;
    if number < 0 {
        Ok(format!("{} {}", words::NEGATIVE, magnitude))
    } else {
        Ok(magnitude)
    }
}

/// Spells out a non-negative magnitude in English.
pub fn magnitude_to_english(magnitude: u128) -> Result<String> {
    if magnitude == 0 {
        return Ok(words::ZERO.to_string());
    }

    let mut groups: Vec<DigitGroup> = DigitGroups::new(magnitude)
        .enumerate()
        .map(|(place_index, value)| DigitGroup::new(place_index, value))
        .filter(|group| group.value > 0)
        .collect();
    groups.reverse();

    let mut response = String::new();
    for (position, group) in groups.iter().enumerate() {
        if position > 0 {
            if group.is_units() && group.value < 100 {
                response.push(' ');
                response.push_str(words::AND);
                response.push(' ');
            } else {
                response.push_str(", ");
            }
        }
        response.push_str(&group.render()?);
    }

    tracing::debug!(magnitude = %magnitude, groups = groups.len(), "composed english");
    Ok(response)
}
