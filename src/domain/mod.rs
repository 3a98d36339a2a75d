//! Pure spelling rules: word tables, digit grouping, integer composition and
//! the dollar amount value object. Nothing in here performs I/O.

pub mod amount;
pub mod digit_group;
pub mod english;
pub mod ports;
pub mod words;
